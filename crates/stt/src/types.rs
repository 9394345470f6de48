use serde::{Deserialize, Serialize};

/// Transcription request following `OpenAI` Whisper API format
#[derive(Debug)]
pub struct TranscriptionRequest {
    /// Raw audio data
    pub audio: Vec<u8>,
    /// Original filename, used by the provider to sniff the container
    pub filename: String,
    /// Content type of the audio file
    pub content_type: String,
    /// Model identifier (e.g. "whisper-1")
    pub model: String,
}

/// Transcription response following `OpenAI` Whisper API format
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Transcribed text
    #[serde(default)]
    pub text: String,
}
