use stt::{SttError, TranscriptionRequest};
use translateai_blob::StoredObject;
use translation::{TranslationError, TranslationRequest};
use tts::{SpeechRequest, SpeechResponse};

use crate::{
    Adapters,
    error::{PipelineError, Result},
    types::content_type_for,
};

const TRANSCRIPTION_MODEL: &str = "whisper-1";

const TRANSLATION_MODEL: &str = "gpt-4";
const TRANSLATION_PROMPT: &str =
    "You will be provided with a sentence in English, and your task is to translate it into Spanish";
const TRANSLATION_TEMPERATURE: f64 = 0.0;
const TRANSLATION_MAX_TOKENS: u32 = 256;

const SPEECH_MODEL: &str = "tts-1";
const SPEECH_VOICE: &str = "onyx";
const SPEECH_FORMAT: &str = "mp3";

/// Sequences fetch → transcribe → translate → synthesize for one input
///
/// Each step runs only after the previous one succeeded. The first failure
/// aborts the run and whatever earlier steps produced is dropped. Nothing
/// is retried.
pub struct TranslationPipeline {
    adapters: Adapters,
}

impl TranslationPipeline {
    pub const fn new(adapters: Adapters) -> Self {
        Self { adapters }
    }

    /// Turn the English speech stored in `input` into Spanish MP3 audio
    pub async fn translate(&self, input: &StoredObject) -> Result<SpeechResponse> {
        let audio = self.adapters.blob.fetch(input).await.map_err(PipelineError::Fetch)?;

        tracing::debug!(name = %input.name, bytes = audio.len(), "input fetched");

        let transcript = self.transcribe(input, audio).await?;
        let translated = self.translate_text(transcript).await?;

        let speech = self
            .adapters
            .tts
            .synthesize(SpeechRequest {
                model: SPEECH_MODEL.to_string(),
                input: translated,
                voice: SPEECH_VOICE.to_string(),
                response_format: SPEECH_FORMAT.to_string(),
            })
            .await
            .map_err(PipelineError::Synthesis)?;

        tracing::debug!(bytes = speech.audio.len(), "speech synthesized");

        Ok(speech)
    }

    async fn transcribe(&self, input: &StoredObject, audio: Vec<u8>) -> Result<String> {
        let response = self
            .adapters
            .stt
            .transcribe(TranscriptionRequest {
                audio,
                filename: input.name.clone(),
                content_type: content_type_for(&input.name).to_string(),
                model: TRANSCRIPTION_MODEL.to_string(),
            })
            .await
            .map_err(PipelineError::Transcription)?;

        if response.text.trim().is_empty() {
            return Err(PipelineError::Transcription(SttError::EmptyTranscript));
        }

        tracing::debug!(chars = response.text.len(), "input transcribed");

        Ok(response.text)
    }

    async fn translate_text(&self, transcript: String) -> Result<String> {
        let response = self
            .adapters
            .translator
            .translate(TranslationRequest {
                model: TRANSLATION_MODEL.to_string(),
                system_prompt: TRANSLATION_PROMPT.to_string(),
                text: transcript,
                temperature: TRANSLATION_TEMPERATURE,
                max_tokens: TRANSLATION_MAX_TOKENS,
            })
            .await
            .map_err(PipelineError::Translation)?;

        let translated = response
            .content
            .filter(|content| !content.trim().is_empty())
            .ok_or(PipelineError::Translation(TranslationError::EmptyTranslation))?;

        tracing::debug!(chars = translated.len(), "transcript translated");

        Ok(translated)
    }
}
