pub(crate) mod openai_tts;

use async_trait::async_trait;

use crate::types::{SpeechRequest, SpeechResponse};

/// Synthesizes speech from text
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize `request.input` into encoded audio
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse>;
}
