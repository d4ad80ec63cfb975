use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::upstream::UpstreamConfig;

/// Main configuration structure for cryptdns.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Upstream DNSCrypt server configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults.
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. cryptdns.toml in current directory
    /// 3. /etc/cryptdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            Self::from_file(path)
        } else if std::path::Path::new("cryptdns.toml").exists() {
            Self::from_file("cryptdns.toml")
        } else if std::path::Path::new("/etc/cryptdns/config.toml").exists() {
            Self::from_file("/etc/cryptdns/config.toml")
        } else {
            Ok(Self::default())
        }
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
