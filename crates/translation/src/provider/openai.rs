//! `OpenAI`-compatible translator

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use super::Translator;
use crate::error::TranslationError;
use crate::protocol::{OpenAiMessage, OpenAiRequest, OpenAiResponse};
use crate::types::{TranslationRequest, TranslationResponse};

/// Default `OpenAI` API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Translator backed by an `OpenAI`-compatible chat completions endpoint
pub struct OpenAiTranslator {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl OpenAiTranslator {
    pub fn new(client: Client, api_key: SecretString, base_url: Option<String>) -> Self {
        let base_url = base_url.map_or_else(
            || DEFAULT_BASE_URL.to_string(),
            |url| url.trim_end_matches('/').to_string(),
        );

        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl<'a> From<&'a TranslationRequest> for OpenAiRequest<'a> {
    fn from(request: &'a TranslationRequest) -> Self {
        Self {
            model: &request.model,
            messages: vec![
                OpenAiMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                OpenAiMessage {
                    role: "user",
                    content: &request.text,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(&self, request: TranslationRequest) -> crate::error::Result<TranslationResponse> {
        let wire_request = OpenAiRequest::from(&request);

        tracing::debug!(model = %request.model, input_len = request.text.len(), "translation request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "upstream request failed");
                TranslationError::Connection(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "upstream returned error");
            return Err(TranslationError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }

        let wire_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        let content = wire_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        tracing::debug!(output_len = content.as_ref().map_or(0, String::len), "translation complete");

        Ok(TranslationResponse { content })
    }
}
