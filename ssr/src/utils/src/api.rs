use consts::API_BASE;
use reqwest::{RequestBuilder, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid endpoint {0}")]
    Endpoint(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message the backend attached to a failed response, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

/// Pulls the `message` field out of an error body, ignoring bodies that are
/// not JSON or carry an empty message.
pub fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

pub fn endpoint(path: &str) -> Result<Url, ApiError> {
    API_BASE
        .join(path)
        .map_err(|e| ApiError::Endpoint(format!("{path}: {e}")))
}

fn with_credentials(req: RequestBuilder) -> RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    let req = req.fetch_credentials_include();
    req
}

async fn read_json<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ApiError> {
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: server_message(&body),
        });
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = endpoint(path)?;
    let client = reqwest::Client::new();
    let res = with_credentials(client.get(url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(res).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = endpoint(path)?;
    let client = reqwest::Client::new();
    let res = with_credentials(client.post(url).json(body))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(res).await
}
