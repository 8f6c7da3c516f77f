/// Error types shared by the popup pipeline
use thiserror::Error;

/// The bundled `secrets.json` could not be turned into a usable config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read bundled configuration: {0}")]
    Unavailable(String),

    #[error("Configuration is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Configuration has an empty API key")]
    EmptyKey,

    #[error("Configuration endpoint is not an http(s) URL: {0}")]
    InvalidEndpoint(String),
}

/// A single HTTP round-trip failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Could not decode response: {0}")]
    Decode(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassificationError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Unknown sentiment code: {0}")]
    UnknownLabel(String),

    #[error("Expected {expected} predictions, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
