use thiserror::Error;

pub type Result<T> = std::result::Result<T, BlobError>;

/// Blob store errors
#[derive(Debug, Error)]
pub enum BlobError {
    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The store rejected the token
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The store answered with a non-success status
    #[error("Blob store error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request could not be built from the given arguments
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The store answered with a body we could not read
    #[error("Invalid response from blob store: {0}")]
    InvalidResponse(String),
}
