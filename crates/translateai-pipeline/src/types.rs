use serde::Serialize;
use translateai_blob::StoredObject;

use crate::controller::SUCCESS_MESSAGE;

/// A file received from the upload form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original filename
    pub name: String,
    /// Content type reported by the browser
    pub content_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Create an upload, guessing the content type from the extension
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = content_type_for(&name).to_string();

        Self {
            name,
            content_type,
            bytes,
        }
    }
}

/// Content type for the media extensions the upload form offers
pub(crate) fn content_type_for(name: &str) -> &'static str {
    let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("mp4") => "video/mp4",
        Some("wav") => "audio/wav",
        Some("m4a") => "audio/mp4",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}

/// Terminal outcome of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineResult {
    /// The translated audio was stored
    Completed { output: StoredObject },
    /// Some step failed; `message` is the originating error's text
    Failed { message: String },
}

impl PipelineResult {
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// JSON body returned to the upload form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormResponse {
    pub ok: bool,
    pub message: String,
    pub file: Option<StoredObject>,
}

impl From<PipelineResult> for FormResponse {
    fn from(result: PipelineResult) -> Self {
        match result {
            PipelineResult::Completed { output } => Self {
                ok: true,
                message: SUCCESS_MESSAGE.to_string(),
                file: Some(output),
            },
            PipelineResult::Failed { message } => Self {
                ok: false,
                message,
                file: None,
            },
        }
    }
}
