use thiserror::Error;
use translateai_blob::BlobError;

use crate::controller::MISSING_FILE_MESSAGE;

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Failure of one submission, tagged with the step that failed
///
/// Every variant displays the underlying adapter message unchanged, which
/// is what the user ends up seeing.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No file was attached to the submission
    #[error("{}", MISSING_FILE_MESSAGE)]
    MissingFile,

    /// Storing the input or the output failed
    #[error(transparent)]
    Upload(BlobError),

    /// Reading the stored input back failed
    #[error(transparent)]
    Fetch(BlobError),

    #[error(transparent)]
    Transcription(stt::SttError),

    #[error(transparent)]
    Translation(translation::TranslationError),

    #[error(transparent)]
    Synthesis(tts::TtsError),
}

impl PipelineError {
    /// Short name of the failed step, for logs
    pub const fn step(&self) -> &'static str {
        match self {
            Self::MissingFile => "validate",
            Self::Upload(_) => "upload",
            Self::Fetch(_) => "fetch",
            Self::Transcription(_) => "transcribe",
            Self::Translation(_) => "translate",
            Self::Synthesis(_) => "synthesize",
        }
    }
}
