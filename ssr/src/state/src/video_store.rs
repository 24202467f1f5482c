use std::future::Future;

use consts::endpoints;
use serde::Deserialize;
use thiserror::Error;
use utils::api::{post_json, ApiError};

use crate::{
    cell::StateCell,
    draft::{VideoDraft, VideoSource},
    form::CreateForm,
    toast::Notifier,
    upload_session::UploadSession,
};

/// What the backend returns for a created video. Only the fields the form
/// logs are read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct VideoRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please upload a video or provide a URL")]
    MissingMedia,
    #[error("failed to create video: {0}")]
    Rejected(#[from] ApiError),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingMedia => self.to_string(),
            Self::Rejected(e) => e
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| "Failed to create video".to_string()),
        }
    }
}

pub trait VideoCreator {
    fn create(&self, draft: &VideoDraft) -> impl Future<Output = Result<VideoRecord, ApiError>>;
}

/// `POST /videos` with the draft as JSON
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpVideoCreator;

impl VideoCreator for HttpVideoCreator {
    async fn create(&self, draft: &VideoDraft) -> Result<VideoRecord, ApiError> {
        post_json(endpoints::VIDEOS, draft).await
    }
}

/// Hands the form's draft to `creator`, resetting the whole form on success.
/// A draft without media never reaches the creator. Failures are surfaced and
/// leave the form as it was so the user can retry.
pub async fn submit_draft<C, D, V, S, N>(
    creator: &C,
    form: &CreateForm<D, V, S>,
    notifier: &N,
) -> Result<VideoRecord, SubmitError>
where
    C: VideoCreator,
    D: StateCell<VideoDraft>,
    V: StateCell<VideoSource>,
    S: StateCell<UploadSession>,
    N: Notifier + ?Sized,
{
    let snapshot = form.draft.read_cell(VideoDraft::clone);
    if !snapshot.has_media() {
        let e = SubmitError::MissingMedia;
        notifier.error(e.user_message());
        return Err(e);
    }

    match creator.create(&snapshot).await {
        Ok(video) => {
            log::info!("created video {:?} {:?}", video.id, video.title);
            form.reset();
            notifier.success("Video created successfully!".to_string());
            Ok(video)
        }
        Err(e) => {
            let e = SubmitError::from(e);
            log::error!("error creating video: {e}");
            notifier.error(e.user_message());
            Err(e)
        }
    }
}
