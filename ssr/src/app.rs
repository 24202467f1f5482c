use component::toaster::Toaster;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use page::{create_video::CreateVideoPage, not_found::NotFound};
use state::toast::ToastState;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ToastState::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/video-share-web.css" />
        <Title text="Video Share" />
        <Router>
            <main class="bg-black">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/users/:id/videos/new") view=CreateVideoPage />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}
