pub mod mode_tabs;
pub mod spinner;
pub mod thumbnail_selector;
pub mod toaster;
pub mod upload_dropzone;
