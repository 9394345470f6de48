use secrecy::SecretString;
use serde::Deserialize;

/// Static credentials checked by the access gate
///
/// Usually filled from `USER_NAME` and `USER_PASSWORD`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessConfig {
    /// Expected user name
    pub user_name: SecretString,
    /// Expected password
    pub user_password: SecretString,
}
