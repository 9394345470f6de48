#![allow(clippy::must_use_candidate)]

pub mod access;
pub mod blob;
mod env;
pub mod health;
mod loader;
pub mod provider;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use access::*;
pub use blob::*;
pub use health::*;
pub use provider::*;
pub use server::*;
pub use telemetry::*;

/// Top-level `TranslateAI` configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// AI provider used for transcription, translation and speech
    pub provider: ProviderConfig,
    /// Blob store holding uploaded and generated files
    pub blob: BlobConfig,
    /// Reference credentials for the access gate
    #[serde(default)]
    pub access: Option<AccessConfig>,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
