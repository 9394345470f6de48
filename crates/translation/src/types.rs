/// A single translation turn
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Chat model identifier (e.g. "gpt-4")
    pub model: String,
    /// Instruction describing the language pair
    pub system_prompt: String,
    /// Text to translate
    pub text: String,
    /// Sampling temperature, 0 for deterministic output
    pub temperature: f64,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

/// Result of a translation turn
#[derive(Debug, Clone, Default)]
pub struct TranslationResponse {
    /// Content of the first choice, if the model produced any
    pub content: Option<String>,
}
