use leptos::{html::Input, prelude::*};
use leptos_icons::*;
use state::upload_session::{clear_upload, UploadSession};
use utils::upload::UploadKind;

use crate::spinner::Spinner;

/// Click-to-pick file area that uploads as soon as a file is chosen.
///
/// Progress and the resolved URL live in `session`, so the owner can observe
/// whether an upload is in flight. `on_resolved` receives the served URL on
/// success and an empty string when the upload is cleared.
#[component]
pub fn UploadDropzone(
    kind: UploadKind,
    session: RwSignal<UploadSession>,
    #[prop(into)] on_resolved: Callback<String>,
) -> impl IntoView {
    let file_ref = NodeRef::<Input>::new();
    let input_id = match kind {
        UploadKind::Video => "video-upload-input",
        UploadKind::Thumbnail => "thumbnail-upload-input",
    };

    // The form may unmount this dropzone while an upload is still running
    let reset_input = move || {
        if let Some(f) = file_ref.try_get_untracked().flatten() {
            f.set_value("");
        }
    };

    #[cfg(feature = "hydrate")]
    {
        use leptos::{ev::change, task::spawn_local};
        use leptos_use::use_event_listener;
        use state::{
            toast::ToastState,
            upload_session::{input_needs_reset, run_upload},
        };
        use utils::upload::{SelectedFile, XhrTransport};

        let toasts = ToastState::get();
        _ = use_event_listener(file_ref, change, move |ev| {
            use wasm_bindgen::JsCast;
            use web_sys::HtmlInputElement;
            let Some(file) = ev.target().and_then(|target| {
                let input: &HtmlInputElement = target.dyn_ref()?;
                input.files()?.get(0)
            }) else {
                return;
            };
            let file = SelectedFile::from_web_file(file);
            log::debug!("picked {} file {:?}", kind.label(), file.meta.name);

            spawn_local(async move {
                let report = move |url: String| _ = on_resolved.try_run(url);
                let res = run_upload(kind, &XhrTransport, file, session, &report, &toasts).await;
                if input_needs_reset(&session, &res) {
                    reset_input();
                }
            });
        });
    }

    let uploading = move || session.with(UploadSession::is_uploading);
    let progress = move || session.with(UploadSession::progress);
    let resolved = move || session.with(|s| s.resolved_url().map(str::to_string));
    let file_name = move || session.with(|s| s.file().map(|f| f.name.clone()).unwrap_or_default());

    let clear = move || {
        let report = move |url: String| on_resolved.run(url);
        clear_upload(&session, &report);
        reset_input();
    };

    let preview = move || {
        resolved().map(|url| {
            let media = match kind {
                UploadKind::Video => view! {
                    <video src=url controls playsinline class="w-full max-h-72 bg-black rounded-lg"></video>
                }
                .into_any(),
                UploadKind::Thumbnail => view! {
                    <img src=url alt="Thumbnail preview" class="object-cover w-full max-h-72 rounded-lg" />
                }
                .into_any(),
            };
            view! {
                <div class="relative w-full">
                    {media}
                    <button
                        type="button"
                        title="Remove"
                        on:click=move |_| clear()
                        class="absolute top-2 right-2 p-1 text-white rounded-full bg-neutral-800/80 hover:bg-neutral-700"
                    >
                        <Icon icon=icondata::ChCross />
                    </button>
                    <p class="mt-2 text-xs truncate text-neutral-400">{file_name}</p>
                </div>
            }
        })
    };

    view! {
        <div class="w-full">
            <Show when=move || resolved().is_none() fallback=preview>
                <label
                    for=input_id
                    class=move || {
                        format!(
                            "flex flex-col gap-3 justify-center items-center p-6 w-full rounded-lg border-2 border-dashed select-none border-neutral-600 bg-neutral-950 {}",
                            if uploading() { "cursor-wait" } else { "cursor-pointer hover:border-pink-400" },
                        )
                    }
                >
                    <Show
                        when=uploading
                        fallback=move || {
                            view! {
                                <Icon attr:class="w-10 h-10 text-neutral-400" icon=icondata::BiCloudUploadRegular />
                                <p class="text-sm text-neutral-300">
                                    <span class="font-semibold">"Click to upload"</span>
                                </p>
                                <p class="text-xs text-neutral-500">{kind.hint()}</p>
                            }
                        }
                    >
                        <Spinner />
                        <span class="text-sm text-neutral-300">
                            {move || format!("Uploading... {}%", progress())}
                        </span>
                        <div class="overflow-hidden w-full h-2 rounded-full bg-neutral-700">
                            <div
                                class="h-full bg-pink-500 transition-all"
                                style:width=move || format!("{}%", progress())
                            ></div>
                        </div>
                    </Show>
                </label>
            </Show>
            <input
                id=input_id
                node_ref=file_ref
                type="file"
                accept=kind.accept()
                disabled=uploading
                class="hidden w-0 h-0"
            />
        </div>
    }
}
