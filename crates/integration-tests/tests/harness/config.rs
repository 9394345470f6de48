//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use secrecy::SecretString;
use translateai_config::{AccessConfig, BlobConfig, Config, HealthConfig, ProviderConfig, ServerConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Minimal config pointed at the given mock upstreams
    pub fn new(openai_base_url: &str, blob_base_url: &str) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    ..ServerConfig::default()
                },
                provider: ProviderConfig {
                    api_key: SecretString::from("sk-test"),
                    base_url: Some(openai_base_url.parse().expect("valid URL")),
                },
                blob: BlobConfig {
                    token: SecretString::from("blob-test-token"),
                    base_url: Some(blob_base_url.parse().expect("valid URL")),
                    api_version: "7".to_owned(),
                },
                access: None,
                telemetry: None,
            },
        }
    }

    /// Set the reference credentials checked by the access gate
    pub fn with_access(mut self, name: &str, password: &str) -> Self {
        self.config.access = Some(AccessConfig {
            user_name: SecretString::from(name),
            user_password: SecretString::from(password),
        });
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Limit request bodies to `bytes`
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.config.server.body_limit_bytes = bytes;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
