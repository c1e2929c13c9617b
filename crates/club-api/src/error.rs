//! Backend client error types.

use club_core::errors::StoreError;
use thiserror::Error;

/// Errors that can occur when talking to the club backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// The backend's `error` message, or the raw response body.
        message: String,
    },

    /// Backend answered 404 for the requested resource.
    #[error("not found: {0}")]
    NotFound(String),

    /// Failed to parse a backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The client could not be built from its configuration.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl From<ApiError> for StoreError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Http(e) if e.is_decode() => Self::Decode(e.to_string()),
            ApiError::Http(e) => Self::Unavailable(e.to_string()),
            ApiError::Api { status, message } => Self::Rejected { status, message },
            ApiError::NotFound(path) => Self::NotFound {
                entity_type: "resource".into(),
                id: path,
            },
            ApiError::Parse(message) => Self::Decode(message),
            ApiError::Config(message) => Self::Unavailable(message),
        }
    }
}
