//! Error types for the job search clients.

use thiserror::Error;

/// Result type for job search client operations.
pub type Result<T> = std::result::Result<T, JobApiError>;

/// Job search client errors.
#[derive(Debug, Error)]
pub enum JobApiError {
    /// Non-2xx response from the API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Network error (connection failed, timeout, invalid request)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API key was empty
    #[error("missing API key")]
    MissingKey,

    /// Response body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl JobApiError {
    /// HTTP status code, if the error came from an API response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::MissingKey | Self::Decode(_) => None,
        }
    }
}
