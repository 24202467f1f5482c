use consts::{AssetEntry, ASSETS_PREFIX, AVAILABLE_AVATARS, AVAILABLE_THUMBNAILS};

pub fn asset_path(filename: &str) -> String {
    format!("{ASSETS_PREFIX}{filename}")
}

pub fn thumbnail_path(filename: &str) -> String {
    asset_path(filename)
}

pub fn avatar_path(filename: &str) -> String {
    asset_path(filename)
}

/// Finds the catalog entry a field value points at.
///
/// A value matches either the served path (`/assets/soccer.png`) or the bare
/// filename (`soccer.png`). Anything else, including external URLs that happen
/// to end with a catalog filename, matches nothing.
pub fn find_selected<'a>(value: &str, catalog: &'a [AssetEntry]) -> Option<&'a AssetEntry> {
    if value.is_empty() {
        return None;
    }
    catalog.iter().find(|entry| {
        value == entry.filename
            || value
                .strip_prefix(ASSETS_PREFIX)
                .is_some_and(|name| name == entry.filename)
    })
}

pub fn selected_thumbnail(value: &str) -> Option<&'static AssetEntry> {
    find_selected(value, &AVAILABLE_THUMBNAILS)
}

pub fn selected_avatar(value: &str) -> Option<&'static AssetEntry> {
    find_selected(value, &AVAILABLE_AVATARS)
}
