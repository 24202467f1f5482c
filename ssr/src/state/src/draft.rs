use serde::Serialize;
use utils::sink::ValueSink;

use crate::categories::Category;

/// The not-yet-created video the form is assembling.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDraft {
    pub title: String,
    pub description: String,
    /// Media reference, either an uploaded file's served URL or a typed one
    pub url: String,
    pub thumbnail_url: String,
    pub user_id: String,
    pub category_id: Option<i64>,
}

impl VideoDraft {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    /// Back to defaults; the owner stays.
    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.user_id));
    }

    pub fn has_media(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Applies a `<select>` value. Anything not in `catalog`, including the
    /// empty placeholder option, leaves the category unselected.
    pub fn choose_category(&mut self, raw: &str, catalog: &[Category]) {
        self.category_id = raw
            .parse::<i64>()
            .ok()
            .filter(|id| catalog.iter().any(|c| c.id == *id));
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VideoSourceMode {
    #[default]
    Upload,
    Url,
}

impl VideoSourceMode {
    pub const ALL: [Self; 2] = [Self::Upload, Self::Url];

    pub fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Url => "URL",
        }
    }
}

/// Upload-vs-URL choice for the media field. The typed URL survives a trip
/// through upload mode and comes back when the user switches back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoSource {
    mode: VideoSourceMode,
    typed_url: String,
}

impl VideoSource {
    pub fn mode(&self) -> VideoSourceMode {
        self.mode
    }

    pub fn typed_url(&self) -> &str {
        &self.typed_url
    }

    /// `uploaded` is the upload session's served URL, if an upload succeeded.
    pub fn set_mode<S: ValueSink + ?Sized>(
        &mut self,
        mode: VideoSourceMode,
        uploaded: Option<&str>,
        sink: &S,
    ) {
        self.mode = mode;
        let resolved = match mode {
            VideoSourceMode::Upload => uploaded.filter(|u| !u.is_empty()).map(str::to_string),
            VideoSourceMode::Url => (!self.typed_url.is_empty()).then(|| self.typed_url.clone()),
        };
        if let Some(value) = resolved {
            sink.report(value);
        }
    }

    pub fn set_typed_url<S: ValueSink + ?Sized>(&mut self, url: String, sink: &S) {
        if url == self.typed_url {
            return;
        }
        self.typed_url = url;
        if self.mode == VideoSourceMode::Url {
            sink.report(self.typed_url.clone());
        }
    }

    pub fn reset(&mut self) {
        self.typed_url.clear();
    }
}
