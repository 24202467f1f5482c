use consts::AssetEntry;
use utils::{
    assets::{selected_thumbnail, thumbnail_path},
    sink::ValueSink,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThumbnailMode {
    #[default]
    Existing,
    Upload,
    Custom,
}

impl ThumbnailMode {
    pub const ALL: [Self; 3] = [Self::Existing, Self::Upload, Self::Custom];

    pub fn label(self) -> &'static str {
        match self {
            Self::Existing => "Existing",
            Self::Upload => "Upload",
            Self::Custom => "URL",
        }
    }
}

/// Which strategy currently supplies the thumbnail URL, and what the
/// non-upload strategies last held. Upload state lives in its own
/// [`UploadSession`](crate::upload_session::UploadSession).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThumbnailSelection {
    mode: ThumbnailMode,
    picked: Option<&'static AssetEntry>,
    custom_url: String,
}

impl ThumbnailSelection {
    /// Starts in "existing" mode, remembering the catalog entry `current`
    /// already points at.
    pub fn new(current: &str) -> Self {
        Self {
            picked: selected_thumbnail(current),
            ..Default::default()
        }
    }

    pub fn mode(&self) -> ThumbnailMode {
        self.mode
    }

    pub fn custom_url(&self) -> &str {
        &self.custom_url
    }

    /// Switches strategy. "existing" and "custom" re-emit what they last held;
    /// "upload" stays silent until an upload succeeds.
    /// `uploaded` is the upload session's served URL, re-emitted when
    /// switching back to [`ThumbnailMode::Upload`] like the video source does.
    pub fn set_mode<S: ValueSink + ?Sized>(
        &mut self,
        mode: ThumbnailMode,
        uploaded: Option<&str>,
        sink: &S,
    ) {
        self.mode = mode;
        let resolved = match mode {
            ThumbnailMode::Upload => uploaded.filter(|u| !u.is_empty()).map(str::to_string),
            _ => self.resolved(),
        };
        if let Some(value) = resolved {
            sink.report(value);
        }
    }

    pub fn select_existing<S: ValueSink + ?Sized>(&mut self, entry: &'static AssetEntry, sink: &S) {
        self.picked = Some(entry);
        if self.mode == ThumbnailMode::Existing {
            sink.report(thumbnail_path(entry.filename));
        }
    }

    pub fn set_custom_url<S: ValueSink + ?Sized>(&mut self, url: String, sink: &S) {
        if url == self.custom_url {
            return;
        }
        self.custom_url = url;
        if self.mode == ThumbnailMode::Custom {
            sink.report(self.custom_url.clone());
        }
    }

    /// Value the active non-upload mode holds, if any
    fn resolved(&self) -> Option<String> {
        match self.mode {
            ThumbnailMode::Existing => self.picked.map(|e| thumbnail_path(e.filename)),
            ThumbnailMode::Custom => {
                (!self.custom_url.is_empty()).then(|| self.custom_url.clone())
            }
            ThumbnailMode::Upload => None,
        }
    }

    /// Catalog entry to highlight for the owner's current value
    pub fn highlighted(value: &str) -> Option<&'static AssetEntry> {
        selected_thumbnail(value)
    }

    /// Source for the shared preview pane. Upload mode renders its own.
    pub fn preview_src(&self, value: &str) -> Option<String> {
        match self.mode {
            ThumbnailMode::Existing => {
                Self::highlighted(value).map(|e| thumbnail_path(e.filename))
            }
            ThumbnailMode::Custom => {
                (!self.custom_url.is_empty()).then(|| self.custom_url.clone())
            }
            ThumbnailMode::Upload => None,
        }
    }
}
