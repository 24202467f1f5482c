use once_cell::sync::Lazy;
use reqwest::Url;

// Release builds must name their backend
#[cfg(any(feature = "release-bin", feature = "release-lib"))]
const RAW_API_BASE: &str = env!("VIDEO_API_BASE");
#[cfg(not(any(feature = "release-bin", feature = "release-lib")))]
const RAW_API_BASE: &str = match option_env!("VIDEO_API_BASE") {
    Some(base) => base,
    None => "https://api.video-share.example/api/",
};

pub static API_BASE: Lazy<Url> =
    Lazy::new(|| api_base(RAW_API_BASE).expect("VIDEO_API_BASE is not a valid URL"));

fn api_base(raw: &str) -> Option<Url> {
    let mut base = raw.to_string();
    // `Url::join` drops the last segment unless the base ends with a slash
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_gains_trailing_slash() {
        let base = api_base("https://backend.test/api").unwrap();
        assert_eq!(
            base.join("videos").unwrap().as_str(),
            "https://backend.test/api/videos"
        );
    }

    #[test]
    fn garbage_base_is_rejected() {
        assert_eq!(api_base("not a url"), None);
    }
}
