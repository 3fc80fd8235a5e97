//! Unified SDK error types.

use thiserror::Error;

/// Result alias used throughout the HTTP pipeline.
pub type HttpResult<T> = Result<T, HttpError>;

/// HTTP-layer errors.
///
/// Nothing in this crate retries; every variant is surfaced to the caller as-is.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Transport-level failure: connection refused, timeout, TLS, redirects.
    #[error("Network error: {0}")]
    Network(String),

    /// The body could not be parsed into structured data.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The server answered with a non-2xx status.
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// An option value had the wrong shape for a known option.
    #[error("Invalid option: {0}")]
    Config(String),
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            HttpError::Network(format!("request timed out: {e}"))
        } else {
            HttpError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(e: serde_json::Error) -> Self {
        HttpError::Decode(e.to_string())
    }
}

/// Error body format returned by the API on failures.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorResponse {
    /// Short error code, e.g. `"Bad Request"`
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable description
    #[serde(default)]
    pub error_description: Option<String>,
}

impl ErrorResponse {
    /// Get the error message, preferring `error_description` over `error`.
    pub fn get_message(&self) -> Option<String> {
        self.error_description
            .clone()
            .or_else(|| self.error.clone())
    }
}
