pub mod create_video;
pub mod not_found;
