use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Blob store configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlobConfig {
    /// Read-write token for the store
    pub token: SecretString,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Value sent in the `x-api-version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_api_version() -> String {
    "7".to_string()
}
