//! API Errors
//!
//! Failures surfaced by the API client. An empty result is not an error;
//! it comes back as `None`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Remote answered with a non-success status code
    #[error("request failed with status {status}")]
    Http { status: u16 },

    /// Body was not JSON or did not match the expected record shape
    #[error("could not read response: {0}")]
    Parse(String),

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
