#[cfg(feature = "hydrate")]
mod xhr;
#[cfg(feature = "hydrate")]
pub use xhr::XhrTransport;

use std::future::Future;

use consts::{
    endpoints,
    limits::{MAX_THUMBNAIL_UPLOAD_BYTES, MAX_VIDEO_UPLOAD_BYTES},
};
use serde::Deserialize;
use thiserror::Error;

use crate::api::server_message;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UploadKind {
    Video,
    Thumbnail,
}

impl UploadKind {
    /// Required prefix of the file's declared MIME type
    pub fn mime_prefix(self) -> &'static str {
        match self {
            Self::Video => "video/",
            Self::Thumbnail => "image/",
        }
    }

    pub fn max_bytes(self) -> u64 {
        match self {
            Self::Video => MAX_VIDEO_UPLOAD_BYTES,
            Self::Thumbnail => MAX_THUMBNAIL_UPLOAD_BYTES,
        }
    }

    pub fn endpoint_path(self) -> &'static str {
        match self {
            Self::Video => endpoints::UPLOAD_VIDEO,
            Self::Thumbnail => endpoints::UPLOAD_THUMBNAIL,
        }
    }

    /// Value for the file input's `accept` attribute
    pub fn accept(self) -> &'static str {
        match self {
            Self::Video => "video/*",
            Self::Thumbnail => "image/*",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Thumbnail => "Thumbnail",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Thumbnail => "thumbnail",
        }
    }

    fn file_label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Thumbnail => "Image",
        }
    }

    fn file_article(self) -> &'static str {
        match self {
            Self::Video => "a video",
            Self::Thumbnail => "an image",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::Video => "MP4, WebM, MOV up to 100MB",
            Self::Thumbnail => "JPG, PNG, GIF up to 10MB",
        }
    }

    pub fn success_message(self) -> String {
        format!("{} uploaded successfully!", self.label())
    }

    pub fn failure_message(self) -> String {
        format!("Failed to upload {}", self.noun())
    }
}

/// What the browser tells us about a picked file before reading it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

#[derive(Clone, Debug)]
pub struct SelectedFile<P> {
    pub meta: FileMeta,
    pub payload: P,
}

#[cfg(feature = "hydrate")]
impl SelectedFile<web_sys::File> {
    pub fn from_web_file(file: web_sys::File) -> Self {
        let meta = FileMeta {
            name: file.name(),
            mime: file.type_(),
            size: file.size() as u64,
        };
        Self {
            meta,
            payload: file,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select {} file", .0.file_article())]
    WrongType(UploadKind),
    #[error("{} file must be less than {}MB", .0.file_label(), .0.max_bytes() / (1024 * 1024))]
    TooLarge(UploadKind),
}

pub fn validate(kind: UploadKind, meta: &FileMeta) -> Result<(), ValidationError> {
    if !meta.mime.starts_with(kind.mime_prefix()) {
        return Err(ValidationError::WrongType(kind));
    }
    if meta.size > kind.max_bytes() {
        return Err(ValidationError::TooLarge(kind));
    }
    Ok(())
}

/// Whole percent of the payload sent so far, rounded down and capped at 100.
pub fn progress_percent(sent: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (u128::from(sent) * 100) / u128::from(total);
    pct.min(100) as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("An upload is already in progress")]
    Busy,
    #[error("network error: {0}")]
    Network(String),
    #[error("upload rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("upload response has no url")]
    MissingUrl,
}

impl UploadError {
    /// Text for the toast shown to the user
    pub fn user_message(&self, kind: UploadKind) -> String {
        match self {
            Self::Invalid(e) => e.to_string(),
            Self::Busy => self.to_string(),
            Self::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Network(_) | Self::Rejected { .. } | Self::MissingUrl => kind.failure_message(),
        }
    }
}

/// Status and body of a finished upload request, before interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    pub url: String,
    pub public_id: Option<String>,
}

#[derive(Deserialize)]
struct UploadBody {
    url: Option<String>,
    #[serde(rename = "publicId")]
    public_id: Option<String>,
}

impl RawResponse {
    pub fn interpret(&self) -> Result<UploadedFile, UploadError> {
        if !(200..300).contains(&self.status) {
            return Err(UploadError::Rejected {
                status: self.status,
                message: server_message(&self.body),
            });
        }
        let body: UploadBody =
            serde_json::from_str(&self.body).map_err(|_| UploadError::MissingUrl)?;
        match body.url {
            Some(url) if !url.is_empty() => Ok(UploadedFile {
                url,
                public_id: body.public_id,
            }),
            _ => Err(UploadError::MissingUrl),
        }
    }
}

/// Called with `(bytes_sent, bytes_total)` on every transport progress event
pub type ProgressFn = Box<dyn Fn(u64, u64)>;

/// Sends one file as the sole part of a multipart request, with credentials.
pub trait UploadTransport {
    type Payload;

    fn send(
        &self,
        kind: UploadKind,
        payload: Self::Payload,
        on_progress: ProgressFn,
    ) -> impl Future<Output = Result<RawResponse, UploadError>>;
}
