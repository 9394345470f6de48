use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use translateai_config::AccessConfig;

const NOT_CONFIGURED: &str = "Las credenciales de acceso no están configuradas";

/// Name and password submitted by the login form
#[derive(Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Outcome of one credential check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Granted,
    Denied,
    /// The check could not run at all
    Errored(String),
}

/// Compares submitted credentials against one static reference pair
///
/// Comparison is exact and case-sensitive. There is no hashing, lockout or
/// rate limiting. A reference pair with an empty value counts as missing on
/// purpose: an unset `USER_NAME` expands to `""` and must not admit an
/// empty login.
pub struct AccessGate {
    reference: Option<(SecretString, SecretString)>,
}

impl AccessGate {
    pub fn new(config: Option<&AccessConfig>) -> Self {
        let reference = config
            .filter(|c| !c.user_name.expose_secret().is_empty() && !c.user_password.expose_secret().is_empty())
            .map(|c| (c.user_name.clone(), c.user_password.clone()));

        if reference.is_none() {
            tracing::warn!("access credentials missing, every login attempt will error");
        }

        Self { reference }
    }

    pub fn authenticate(&self, name: &str, password: &str) -> AuthResult {
        let Some((expected_name, expected_password)) = &self.reference else {
            return AuthResult::Errored(NOT_CONFIGURED.to_string());
        };

        if name == expected_name.expose_secret() && password == expected_password.expose_secret() {
            AuthResult::Granted
        } else {
            AuthResult::Denied
        }
    }
}
