use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// `OpenAI`-compatible provider serving transcription, chat completion and speech
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// API key
    pub api_key: SecretString,
    /// Base URL override (e.g. `https://api.openai.com/v1`)
    #[serde(default)]
    pub base_url: Option<Url>,
}
