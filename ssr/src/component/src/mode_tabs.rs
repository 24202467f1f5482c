use leptos::prelude::*;
use leptos_icons::*;

/// Segmented switch. Children are expected to be [`ModeTab`]s.
#[component]
pub fn ModeTabs(children: Children) -> impl IntoView {
    view! {
        <div class="flex gap-1 p-1 w-full rounded-lg bg-neutral-800">{children()}</div>
    }
}

#[component]
pub fn ModeTab(
    #[prop(into)] active: Signal<bool>,
    icon: icondata::Icon,
    label: &'static str,
    #[prop(into)] on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |_| on_select.run(())
            class=move || {
                format!(
                    "flex flex-1 gap-2 justify-center items-center py-2 px-3 text-sm rounded-md transition-colors {}",
                    if active.get() {
                        "bg-pink-500 text-white"
                    } else {
                        "text-neutral-400 hover:text-white"
                    },
                )
            }
        >
            <Icon attr:class="w-4 h-4" icon=icon />
            <span>{label}</span>
        </button>
    }
}
