//! `OpenAI` chat completion API wire format types

use serde::{Deserialize, Serialize};

// -- Request types --

/// `OpenAI` chat completion request
#[derive(Debug, Serialize)]
pub struct OpenAiRequest<'a> {
    /// Model identifier
    pub model: &'a str,
    /// Conversation messages
    pub messages: Vec<OpenAiMessage<'a>>,
    /// Sampling temperature
    pub temperature: f64,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

/// `OpenAI` message within a request
#[derive(Debug, Serialize)]
pub struct OpenAiMessage<'a> {
    /// Message role
    pub role: &'a str,
    /// Text content
    pub content: &'a str,
}

// -- Response types --

/// `OpenAI` chat completion response
#[derive(Debug, Deserialize)]
pub struct OpenAiResponse {
    /// Completion choices
    #[serde(default)]
    pub choices: Vec<OpenAiChoice>,
}

/// Single completion choice
#[derive(Debug, Deserialize)]
pub struct OpenAiChoice {
    /// Generated message
    pub message: OpenAiResponseMessage,
}

/// Assistant message in a completion choice
#[derive(Debug, Deserialize)]
pub struct OpenAiResponseMessage {
    /// Text content, absent for refusals and tool calls
    #[serde(default)]
    pub content: Option<String>,
}
