//! Client error types.

use promoshelf_core::storage::RemoteFetchError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<ClientError> for RemoteFetchError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) => RemoteFetchError::ConnectionFailed(e.to_string()),
            ClientError::ServerError { status, message } => {
                RemoteFetchError::Status { status, message }
            }
            ClientError::InvalidResponse(message) => RemoteFetchError::InvalidResponse(message),
        }
    }
}
