use consts::AVAILABLE_THUMBNAILS;
use leptos::prelude::*;
use leptos_icons::*;
use state::{
    thumbnail::{ThumbnailMode, ThumbnailSelection},
    upload_session::UploadSession,
};
use utils::{assets::thumbnail_path, upload::UploadKind};

use crate::{
    mode_tabs::{ModeTab, ModeTabs},
    upload_dropzone::UploadDropzone,
};

fn mode_icon(mode: ThumbnailMode) -> icondata::Icon {
    match mode {
        ThumbnailMode::Existing => icondata::BiImageRegular,
        ThumbnailMode::Upload => icondata::BiCloudUploadRegular,
        ThumbnailMode::Custom => icondata::BiLinkRegular,
    }
}

/// Controlled thumbnail picker.
///
/// `value` is the owner's current thumbnail URL; every URL the active mode
/// resolves to goes out through `on_change`. Pass `session` to observe the
/// upload mode's progress from outside.
#[component]
pub fn ThumbnailSelector(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] session: Option<RwSignal<UploadSession>>,
) -> impl IntoView {
    let session = session.unwrap_or_else(|| RwSignal::new(UploadSession::default()));
    let selection = RwSignal::new(ThumbnailSelection::new(&value.get_untracked()));
    let preview_failed = RwSignal::new(false);
    let report = move |url: String| on_change.run(url);

    let mode = move || selection.with(ThumbnailSelection::mode);

    let tabs = ThumbnailMode::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <ModeTab
                    active=Signal::derive(move || mode() == tab)
                    icon=mode_icon(tab)
                    label=tab.label()
                    on_select=move |_| {
                        preview_failed.set(false);
                        let uploaded = session
                            .with_untracked(|s| s.resolved_url().map(str::to_string));
                        selection.update(|s| s.set_mode(tab, uploaded.as_deref(), &report));
                    }
                />
            }
        })
        .collect_view();

    let catalog = AVAILABLE_THUMBNAILS
        .iter()
        .map(|entry| {
            let selected = move || {
                value.with(|v| ThumbnailSelection::highlighted(v) == Some(entry))
            };
            view! {
                <button
                    type="button"
                    title=entry.label
                    on:click=move |_| {
                        preview_failed.set(false);
                        selection.update(|s| s.select_existing(entry, &report));
                    }
                    class=move || {
                        format!(
                            "overflow-hidden relative rounded-lg border-2 transition-colors aspect-video {}",
                            if selected() { "border-pink-500" } else { "border-transparent hover:border-neutral-500" },
                        )
                    }
                >
                    <img src=thumbnail_path(entry.filename) alt=entry.label class="object-cover w-full h-full" />
                    <Show when=selected>
                        <div class="flex absolute inset-0 justify-center items-center bg-pink-500/40">
                            <Icon attr:class="w-6 h-6 text-white" icon=icondata::BiCheckRegular />
                        </div>
                    </Show>
                    <span class="absolute inset-x-0 bottom-0 py-1 text-xs text-center text-white bg-black/60">
                        {entry.label}
                    </span>
                </button>
            }
        })
        .collect_view();

    let preview_src = move || selection.with(|s| value.with(|v| s.preview_src(v)));

    view! {
        <div class="flex flex-col gap-3 w-full">
            <ModeTabs>{tabs}</ModeTabs>
            <div class=move || if mode() == ThumbnailMode::Existing { "grid grid-cols-2 gap-3 sm:grid-cols-4" } else { "hidden" }>
                {catalog}
            </div>
            <div class=move || if mode() == ThumbnailMode::Upload { "block" } else { "hidden" }>
                <UploadDropzone kind=UploadKind::Thumbnail session=session on_resolved=on_change />
            </div>
            <Show when=move || mode() == ThumbnailMode::Custom>
                <input
                    type="url"
                    placeholder="Enter image URL (https://...)"
                    prop:value=move || selection.with(|s| s.custom_url().to_string())
                    on:input=move |ev| {
                        preview_failed.set(false);
                        selection.update(|s| s.set_custom_url(event_target_value(&ev), &report));
                    }
                    class="p-3 w-full rounded-lg border transition outline-none focus:border-pink-400 focus:ring-pink-400 bg-neutral-900 border-neutral-800 text-[15px] placeholder:text-neutral-500"
                />
            </Show>
            {move || {
                preview_src()
                    .map(|src| {
                        view! {
                            <div class="overflow-hidden w-full rounded-lg bg-neutral-900">
                                <img
                                    src=src
                                    alt="Selected thumbnail"
                                    on:error=move |_| preview_failed.set(true)
                                    on:load=move |_| preview_failed.set(false)
                                    style:display=move || if preview_failed.get() { "none" } else { "block" }
                                    class="object-cover w-full max-h-72"
                                />
                            </div>
                        }
                    })
            }}
        </div>
    }
}
