//! Error types for the memo client

use thiserror::Error;

use crate::ValidationError;

/// A non-2xx response from the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("HTTP {status}: {body}")]
pub struct RequestError {
    pub status: u16,
    pub body: String,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("network error: {0}")]
    Network(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid API base URL `{0}`")]
    BaseUrl(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
