use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2 justify-center items-center w-full text-center min-h-dvh">
            <h1 class="text-2xl font-semibold">"404"</h1>
            <p class="text-neutral-400">"Page not found"</p>
        </div>
    }
}
