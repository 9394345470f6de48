pub(crate) mod whisper;

use async_trait::async_trait;

use crate::types::{TranscriptionRequest, TranscriptionResponse};

/// Transcribes recorded speech into text
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text
    async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<TranscriptionResponse>;
}
