use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Text-to-speech errors
#[derive(Debug, Error)]
pub enum TtsError {
    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Authentication failed (missing or invalid API key)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider API returned an error
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The audio body could not be read
    #[error("Failed to read synthesized audio: {0}")]
    InvalidResponse(String),
}
