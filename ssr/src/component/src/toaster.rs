use leptos::prelude::*;
use leptos_icons::*;
use state::toast::{Toast, ToastKind, ToastState};

/// Renders the toasts queued in the [`ToastState`] context
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = ToastState::get();

    view! {
        <div class="flex fixed right-4 bottom-4 flex-col gap-2 w-80 max-w-[90vw] z-[100]">
            <For
                each=move || toasts.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| view! { <ToastItem toast=toast state=toasts /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, state: ToastState) -> impl IntoView {
    let (icon, tone) = match toast.kind {
        ToastKind::Success => (icondata::BiCheckCircleRegular, "border-green-500 text-green-400"),
        ToastKind::Error => (icondata::BiErrorCircleRegular, "border-red-500 text-red-400"),
    };
    let id = toast.id;

    view! {
        <div
            role="status"
            class=format!("flex gap-3 items-start p-3 rounded-lg border shadow-lg bg-neutral-900 {tone}")
        >
            <Icon attr:class="w-5 h-5 shrink-0" icon=icon />
            <p class="flex-1 text-sm text-white">{toast.message}</p>
            <button
                type="button"
                on:click=move |_| state.dismiss(id)
                class="text-neutral-400 hover:text-white"
            >
                <Icon icon=icondata::ChCross />
            </button>
        </div>
    }
}
