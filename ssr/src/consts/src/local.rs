use once_cell::sync::Lazy;
use reqwest::Url;

pub static API_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://localhost:8080/api/").unwrap());
