pub mod categories;
pub mod cell;
pub mod draft;
pub mod form;
pub mod thumbnail;
pub mod toast;
pub mod upload_session;
pub mod video_store;

#[cfg(test)]
pub(crate) mod test_support;
