/// Popup configuration read from the bundled `secrets.json`
use crate::bridge;
use crate::error::ConfigError;
use serde::Deserialize;
use url::Url;

pub const SECRETS_RESOURCE: &str = "secrets.json";
pub const DEFAULT_COMMENTS_API_URL: &str = "https://www.googleapis.com/youtube/v3/commentThreads";
pub const DEFAULT_MAX_COMMENTS: usize = 500;
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const DEFAULT_PREVIEW_LIMIT: usize = 25;

/// The commentThreads API rejects larger pages.
const MAX_PAGE_SIZE: u32 = 100;

/// Settings for one popup open. Built once, then only borrowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    /// Sentiment classification endpoint
    pub api_url: Url,
    pub comments_api_url: Url,
    pub max_comments: usize,
    pub page_size: u32,
    pub preview_limit: usize,
}

/// On-disk shape of `secrets.json`
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "API_KEY", alias = "api_key")]
    api_key: String,
    #[serde(rename = "API_URL", alias = "api_url")]
    api_url: String,
    #[serde(rename = "COMMENTS_API_URL", alias = "comments_api_url", default)]
    comments_api_url: Option<String>,
    #[serde(rename = "MAX_COMMENTS", alias = "max_comments", default)]
    max_comments: Option<usize>,
    #[serde(rename = "PAGE_SIZE", alias = "page_size", default)]
    page_size: Option<u32>,
    #[serde(rename = "PREVIEW_LIMIT", alias = "preview_limit", default)]
    preview_limit: Option<usize>,
}

impl Config {
    /// Parse and validate the text of `secrets.json`
    pub fn from_json(text: &str) -> Result<Config, ConfigError> {
        let raw: RawConfig = serde_json::from_str(text)?;

        let api_key = raw.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::EmptyKey);
        }

        let api_url = parse_endpoint(&raw.api_url)?;
        let comments_api_url = parse_endpoint(
            raw.comments_api_url
                .as_deref()
                .unwrap_or(DEFAULT_COMMENTS_API_URL),
        )?;

        Ok(Config {
            api_key,
            api_url,
            comments_api_url,
            max_comments: raw.max_comments.unwrap_or(DEFAULT_MAX_COMMENTS),
            page_size: raw
                .page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
            preview_limit: raw.preview_limit.unwrap_or(DEFAULT_PREVIEW_LIMIT),
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidEndpoint(format!("{}: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::InvalidEndpoint(raw.to_string())),
    }
}

/// Load the configuration bundled with the extension
pub async fn load() -> Result<Config, ConfigError> {
    let text = bridge::load_bundled_resource(SECRETS_RESOURCE)
        .await
        .map_err(ConfigError::Unavailable)?;

    let config = Config::from_json(&text)?;
    log::debug!("Loaded configuration, classifier at {}", config.api_url);
    Ok(config)
}
