use thiserror::Error;

/// Errors raised while fetching the shelf from the remote source.
///
/// Repositories return these verbatim; they are never wrapped on the way up.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteFetchError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Remote returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for remote fetch and repository operations.
pub type Result<T> = std::result::Result<T, RemoteFetchError>;
