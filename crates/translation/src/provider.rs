pub(crate) mod openai;

use async_trait::async_trait;

use crate::types::{TranslationRequest, TranslationResponse};

/// Translates text with a language model
#[async_trait]
pub trait Translator: Send + Sync {
    /// Run one translation turn
    async fn translate(&self, request: TranslationRequest) -> crate::error::Result<TranslationResponse>;
}
