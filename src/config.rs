use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::client::ConnectTimeout;
use crate::error::ConfigError;

/// Connection settings for a [`Client`](crate::Client).
///
/// ```toml
/// address = "graphite.example.org:2003"
/// timeout = 10      # seconds; 0 = default (5s), -1 = no timeout
/// prefix = "app.web01"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub address: String,
    pub timeout: ConnectTimeout,
    pub prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: "localhost:2003".to_string(),
            timeout: ConnectTimeout::Default,
            prefix: String::new(),
        }
    }
}

/// Values given on the command line or in the environment. Each one that is
/// set replaces the corresponding config file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub address: Option<String>,
    pub prefix: Option<String>,
    /// Seconds, with the same meaning as `timeout` in the config file.
    pub timeout: Option<i64>,
}

impl ClientConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Loads `path` when given, otherwise starts from the defaults, then applies `overrides`.
    pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(address) = overrides.address {
            config.address = address;
        }
        if let Some(prefix) = overrides.prefix {
            config.prefix = prefix;
        }
        if let Some(secs) = overrides.timeout {
            config.timeout = ConnectTimeout::try_from(secs).map_err(ConfigError::Timeout)?;
        }

        Ok(config)
    }
}
