use crate::{
    cell::StateCell,
    draft::{VideoDraft, VideoSource},
    upload_session::UploadSession,
};

/// Every piece of state behind the create-video form.
#[derive(Clone, Copy, Debug)]
pub struct CreateForm<D, V, S> {
    pub draft: D,
    pub source: V,
    pub video_upload: S,
    pub thumbnail_upload: S,
}

impl<D, V, S> CreateForm<D, V, S>
where
    D: StateCell<VideoDraft>,
    V: StateCell<VideoSource>,
    S: StateCell<UploadSession>,
{
    /// Empties the form for the next video. The owner and the chosen video
    /// source tab are kept.
    pub fn reset(&self) {
        self.draft.write_cell(VideoDraft::reset);
        self.source.write_cell(VideoSource::reset);
        self.video_upload.write_cell(UploadSession::clear);
        self.thumbnail_upload.write_cell(UploadSession::clear);
    }
}
