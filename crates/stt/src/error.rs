use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Speech-to-text errors
#[derive(Debug, Error)]
pub enum SttError {
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

    /// Provider answered with a body we could not parse
    #[error("Invalid response from provider: {0}")]
    InvalidResponse(String),

    /// Provider answered successfully but recognized no speech
    #[error("Ha ocurrido un error en la transcripción")]
    EmptyTranscript,
}
