//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint unreachable (mockable transport failure)
    #[error("Connection failed: {0}")]
    Unreachable(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether this error is a transport failure (endpoint unreachable),
    /// as opposed to a malformed or rejecting response.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Http(_) | ClientError::Unreachable(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for shared::AppError {
    /// Map a client failure onto the shared taxonomy: transport failures
    /// become network errors, anything else an invalid-response error.
    fn from(err: ClientError) -> Self {
        if err.is_transport() {
            shared::AppError::with_message(
                shared::ErrorCode::NetworkUnreachable,
                shared::ErrorCode::NetworkUnreachable.message(),
            )
            .with_detail("cause", err.to_string())
        } else {
            shared::AppError::with_message(shared::ErrorCode::InvalidResponse, err.to_string())
        }
    }
}
