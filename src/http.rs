/// JSON-over-HTTP client used by the comment fetcher and sentiment client
use crate::error::HttpError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

/// The two request shapes the popup needs.
///
/// Calls are awaited one at a time on the popup's single task, so the
/// futures carry no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, HttpError>;

    async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned;
}

/// `reqwest` client; on wasm32 this goes through `window.fetch`
#[derive(Debug, Clone, Default)]
pub struct BrowserClient {
    client: reqwest::Client,
}

impl BrowserClient {
    pub fn new() -> Self {
        BrowserClient {
            client: reqwest::Client::new(),
        }
    }
}

impl HttpClient for BrowserClient {
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;
        decode_json(response).await
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;
        decode_json(response).await
    }
}

async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, HttpError> {
    let status = response.status();
    if !status.is_success() {
        return Err(HttpError::Status(status.as_u16()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| HttpError::Transport(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| HttpError::Decode(e.to_string()))
}
