//! Text translation backed by a chat completion model

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod protocol;
mod provider;
mod types;

pub use error::{Result, TranslationError};
pub use provider::{Translator, openai::OpenAiTranslator};
pub use types::{TranslationRequest, TranslationResponse};
