//! Client error types

use shared::AppError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No API key configured
    #[error("Narrative API key is not configured")]
    MissingApiKey,

    /// Service answered with a non-success status
    #[error("Service error ({status}): {body}")]
    Service { status: u16, body: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match &err {
            ClientError::MissingApiKey => AppError::config(err.to_string()),
            ClientError::Http(e) if e.is_timeout() => {
                AppError::new(shared::ErrorCode::TimeoutError)
            }
            ClientError::Http(_) => {
                AppError::with_message(shared::ErrorCode::NetworkError, err.to_string())
            }
            _ => AppError::narrative(err.to_string()),
        }
    }
}
