use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranslationError>;

/// Errors that can occur while translating text
#[derive(Debug, Error)]
pub enum TranslationError {
    /// Upstream provider returned an error status
    #[error("upstream error: provider returned {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Network or connection error
    #[error("connection error: {0}")]
    Connection(String),

    /// Provider answered with a body we could not parse
    #[error("failed to parse response: {0}")]
    InvalidResponse(String),

    /// Completion carried no text
    #[error("Ha ocurrido un error en la traducción")]
    EmptyTranslation,
}
