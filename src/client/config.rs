use std::fmt;

use serde::Deserialize;

use crate::domain::ValidationError;

pub const DEFAULT_TIMEOUT_MILLIS: u64 = 60_000;

pub const ENV_USERNAME: &str = "SMARTSMS_USERNAME";
pub const ENV_PASSWORD: &str = "SMARTSMS_PASSWORD";
pub const ENV_HOST: &str = "SMARTSMS_HOST";
pub const ENV_TIMEOUT_MILLIS: &str = "SMARTSMS_TIMEOUT_MILLIS";

/// Plain connection settings, e.g. deserialized from an application config file.
///
/// Values are validated when the client is built via
/// [`GatewayClient::from_config`](crate::GatewayClient::from_config).
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    pub username: String,
    pub password: String,
    /// Base URL; defaults to [`DEFAULT_HOST`](crate::DEFAULT_HOST).
    #[serde(default)]
    pub host: Option<String>,
    /// Defaults to [`DEFAULT_TIMEOUT_MILLIS`]; `0` also means the default.
    #[serde(default)]
    pub timeout_millis: Option<u64>,
}

impl ClientConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            host: None,
            timeout_millis: None,
        }
    }

    /// Read `SMARTSMS_USERNAME`, `SMARTSMS_PASSWORD`, `SMARTSMS_HOST` and
    /// `SMARTSMS_TIMEOUT_MILLIS` from the process environment.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationError> {
        let username = lookup(ENV_USERNAME).ok_or(ValidationError::Missing {
            field: ENV_USERNAME,
        })?;
        let password = lookup(ENV_PASSWORD).ok_or(ValidationError::Missing {
            field: ENV_PASSWORD,
        })?;
        let timeout_millis = lookup(ENV_TIMEOUT_MILLIS)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ValidationError::InvalidTimeout)
            })
            .transpose()?;

        Ok(Self {
            username,
            password,
            host: lookup(ENV_HOST),
            timeout_millis,
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("host", &self.host)
            .field("timeout_millis", &self.timeout_millis)
            .finish()
    }
}
