use component::{
    mode_tabs::{ModeTab, ModeTabs},
    thumbnail_selector::ThumbnailSelector,
    upload_dropzone::UploadDropzone,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;
use leptos_router::{hooks::use_params, params::Params};
use state::{
    categories::{load_categories, HttpCategories},
    draft::{VideoDraft, VideoSource, VideoSourceMode},
    form::CreateForm,
    toast::ToastState,
    upload_session::UploadSession,
    video_store::{submit_draft, HttpVideoCreator},
};
use utils::upload::UploadKind;

const INPUT_CLASS: &str = "p-3 w-full rounded-lg border transition outline-none focus:border-pink-400 focus:ring-pink-400 bg-neutral-900 border-neutral-800 text-[15px] placeholder:text-neutral-500 placeholder:font-light";
const LABEL_CLASS: &str = "mb-1 font-light text-[18px] text-neutral-300";

#[derive(Params, PartialEq, Eq, Clone, Debug)]
struct CreateVideoParams {
    id: String,
}

#[component]
pub fn CreateVideoPage() -> impl IntoView {
    let params = use_params::<CreateVideoParams>();

    view! {
        <Title text="Create Video" />
        {move || match params.get() {
            Ok(CreateVideoParams { id }) => view! { <CreateVideoForm user_id=id /> }.into_any(),
            Err(e) => {
                log::warn!("invalid create video route: {e}");
                view! { <p class="p-8 text-center text-neutral-400">"Unknown user"</p> }.into_any()
            }
        }}
    }
}

fn source_icon(mode: VideoSourceMode) -> icondata::Icon {
    match mode {
        VideoSourceMode::Upload => icondata::BiCloudUploadRegular,
        VideoSourceMode::Url => icondata::BiLinkRegular,
    }
}

/// Form that assembles a [`VideoDraft`] for `user_id` and posts it.
#[component]
pub fn CreateVideoForm(#[prop(into)] user_id: String) -> impl IntoView {
    let toasts = ToastState::get();
    let draft = RwSignal::new(VideoDraft::new(user_id));
    let source = RwSignal::new(VideoSource::default());
    let video_session = RwSignal::new(UploadSession::default());
    let thumbnail_session = RwSignal::new(UploadSession::default());
    // Bumped after each created video so the upload widgets remount empty
    let generation = RwSignal::new(0u32);

    let categories = LocalResource::new(|| load_categories(&HttpCategories));

    let set_url = move |url: String| draft.update(|d| d.url = url);
    let set_thumbnail = move |url: String| draft.update(|d| d.thumbnail_url = url);

    let form = CreateForm {
        draft,
        source,
        video_upload: video_session,
        thumbnail_upload: thumbnail_session,
    };

    let create_action = Action::new_local(move |_: &()| async move {
        let res = submit_draft(&HttpVideoCreator, &form, &toasts).await;
        if res.is_ok() {
            generation.update(|g| *g += 1);
        }
        res
    });

    let creating = create_action.pending();
    let busy = move || {
        creating.get()
            || video_session.with(UploadSession::is_uploading)
            || thumbnail_session.with(UploadSession::is_uploading)
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        create_action.dispatch(());
    };

    let source_mode = move || source.with(VideoSource::mode);
    let source_tabs = VideoSourceMode::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <ModeTab
                    active=Signal::derive(move || source_mode() == tab)
                    icon=source_icon(tab)
                    label=tab.label()
                    on_select=move |_| {
                        let uploaded = video_session
                            .with_untracked(|s| s.resolved_url().map(str::to_string));
                        source.update(|s| s.set_mode(tab, uploaded.as_deref(), &set_url));
                    }
                />
            }
        })
        .collect_view();

    view! {
        <div class="flex justify-center py-10 px-4 w-full text-white bg-black min-h-dvh">
            <form on:submit=on_submit class="flex flex-col gap-6 w-full max-w-[627px]">
                <h2 class="font-light text-white text-[32px]">"Create Video"</h2>

                <div class="flex flex-col gap-y-1">
                    <label for="video-title" class=LABEL_CLASS>"Title"</label>
                    <input
                        id="video-title"
                        type="text"
                        required
                        placeholder="Enter video title"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        class=INPUT_CLASS
                    />
                </div>

                <div class="flex flex-col gap-y-1">
                    <label for="video-description" class=LABEL_CLASS>"Description"</label>
                    <textarea
                        id="video-description"
                        rows=4
                        required
                        placeholder="Tell viewers about your video"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        class=INPUT_CLASS
                    ></textarea>
                </div>

                <div class="flex flex-col gap-y-2">
                    <span class=LABEL_CLASS>"Video"</span>
                    <ModeTabs>{source_tabs}</ModeTabs>
                    <div class=move || if source_mode() == VideoSourceMode::Upload { "block" } else { "hidden" }>
                        {move || {
                            generation.track();
                            view! {
                                <UploadDropzone
                                    kind=UploadKind::Video
                                    session=video_session
                                    on_resolved=set_url
                                />
                            }
                        }}
                    </div>
                    <Show when=move || source_mode() == VideoSourceMode::Url>
                        <input
                            type="text"
                            placeholder="https://... or /videos/filename.mp4"
                            prop:value=move || source.with(|s| s.typed_url().to_string())
                            on:input=move |ev| {
                                source.update(|s| s.set_typed_url(event_target_value(&ev), &set_url))
                            }
                            class=INPUT_CLASS
                        />
                    </Show>
                </div>

                <div class="flex flex-col gap-y-2">
                    <span class=LABEL_CLASS>"Thumbnail"</span>
                    {move || {
                        generation.track();
                        view! {
                            <ThumbnailSelector
                                value=Signal::derive(move || draft.with(|d| d.thumbnail_url.clone()))
                                on_change=set_thumbnail
                                session=thumbnail_session
                            />
                        }
                    }}
                </div>

                <div class="flex flex-col gap-y-1">
                    <label for="video-category" class=LABEL_CLASS>"Category"</label>
                    <select
                        id="video-category"
                        required
                        prop:value=move || {
                            draft.with(|d| d.category_id.map(|id| id.to_string()).unwrap_or_default())
                        }
                        on:change=move |ev| {
                            let raw = event_target_value(&ev);
                            let catalog = categories.get().unwrap_or_default();
                            draft.update(|d| d.choose_category(&raw, &catalog));
                        }
                        class=INPUT_CLASS
                    >
                        <option value="">"Select a category"</option>
                        {move || {
                            categories
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>

                <button
                    type="submit"
                    disabled=busy
                    class="py-3 w-full font-semibold text-white bg-pink-500 rounded-lg transition-colors hover:bg-pink-600 disabled:cursor-not-allowed disabled:opacity-50"
                >
                    {move || if creating.get() { "Creating..." } else { "Create Video" }}
                </button>
            </form>
        </div>
    }
}
