use serde::Serialize;

/// Speech synthesis request following `OpenAI` TTS API format
#[derive(Debug, Serialize)]
pub struct SpeechRequest {
    /// Model identifier (e.g. "tts-1")
    pub model: String,
    /// Text to synthesize into speech
    pub input: String,
    /// Voice identifier (e.g. "onyx")
    pub voice: String,
    /// Output audio format (mp3, opus, aac, flac, wav, pcm)
    pub response_format: String,
}

/// Raw audio returned by a TTS provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechResponse {
    /// Encoded audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}
