pub mod api;
pub mod assets;
pub mod sink;
pub mod upload;
