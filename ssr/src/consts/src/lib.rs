#[cfg(any(feature = "local-bin", feature = "local-lib"))]
mod local;
#[cfg(any(feature = "local-bin", feature = "local-lib"))]
pub use local::*;

#[cfg(not(any(feature = "local-bin", feature = "local-lib")))]
mod remote;
#[cfg(not(any(feature = "local-bin", feature = "local-lib")))]
pub use remote::*;

pub mod limits;

/// Served path prefix for the built-in images under `public/assets`
pub const ASSETS_PREFIX: &str = "/assets/";

/// Multipart field the upload endpoints read the file from
pub const UPLOAD_FORM_FIELD: &str = "file";

pub const TOAST_DURATION_MS: u32 = 4000;

/// A built-in image that can be picked instead of uploading one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssetEntry {
    pub filename: &'static str,
    pub label: &'static str,
}

/// Thumbnails selectable when creating or editing a video
pub static AVAILABLE_THUMBNAILS: [AssetEntry; 4] = [
    AssetEntry {
        filename: "music-player.png",
        label: "Music",
    },
    AssetEntry {
        filename: "game-controller.png",
        label: "Gaming",
    },
    AssetEntry {
        filename: "soccer.png",
        label: "Sports",
    },
    AssetEntry {
        filename: "video-player.png",
        label: "Video",
    },
];

/// Avatars selectable as profile pictures
pub static AVAILABLE_AVATARS: [AssetEntry; 2] = [
    AssetEntry {
        filename: "avatar.png",
        label: "Default",
    },
    AssetEntry {
        filename: "logo.png",
        label: "Logo",
    },
];

/// Paths relative to [`API_BASE`]
pub mod endpoints {
    pub const UPLOAD_VIDEO: &str = "uploads/video";
    pub const UPLOAD_THUMBNAIL: &str = "uploads/thumbnail";
    pub const CATEGORIES: &str = "categories";
    pub const VIDEOS: &str = "videos";
}
