use thiserror::Error;

/// Infrastructure failures underneath the client core.
///
/// Remote outcomes (auth required, quota exceeded, server messages) are not
/// errors; they are reported through the outcome types of each component.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Storage error: {0}")]
    Storage(#[from] sled::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
