use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="w-8 h-8 rounded-full border-4 animate-spin border-neutral-600 border-t-pink-500"></div>
    }
}
