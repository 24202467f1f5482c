const MIB: u64 = 1024 * 1024;

/// Largest video accepted by the upload endpoint, in bytes
pub const MAX_VIDEO_UPLOAD_BYTES: u64 = 100 * MIB;
/// Largest thumbnail image accepted by the upload endpoint, in bytes
pub const MAX_THUMBNAIL_UPLOAD_BYTES: u64 = 10 * MIB;
