use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::SttError,
    types::{TranscriptionRequest, TranscriptionResponse},
};

use super::SpeechToText;

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// `OpenAI` Whisper STT provider
pub struct WhisperProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl WhisperProvider {
    pub fn new(client: Client, api_key: SecretString, base_url: Option<String>) -> Self {
        let base_url = base_url.map_or_else(
            || DEFAULT_OPENAI_API_URL.to_string(),
            |url| url.trim_end_matches('/').to_string(),
        );

        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl SpeechToText for WhisperProvider {
    async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<TranscriptionResponse> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        tracing::debug!(
            "Whisper transcription request: {} bytes, model={}",
            request.audio.len(),
            request.model,
        );

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(request.audio)
                    .file_name(request.filename)
                    .mime_str(&request.content_type)
                    .map_err(|e| SttError::InvalidRequest(format!("Invalid content type: {e}")))?,
            )
            .text("model", request.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Whisper request failed: {e}");
                SttError::ConnectionError(format!("Failed to send request to Whisper: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Whisper API error ({status}): {error_text}");

            return Err(match status.as_u16() {
                401 => SttError::AuthenticationFailed(error_text),
                400 => SttError::InvalidRequest(error_text),
                _ => SttError::ProviderApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let result: TranscriptionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Whisper response: {e}");
            SttError::InvalidResponse(e.to_string())
        })?;

        tracing::debug!(chars = result.text.len(), "Whisper transcription complete");

        Ok(result)
    }
}
