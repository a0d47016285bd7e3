use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/sdui/config.toml` on Unix, or the platform equivalent
    /// via `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("sdui").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The tick rate is non-zero
    /// - At least one navigation scheme is allowed
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewer.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "viewer.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if self.navigation.allowed_schemes.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "navigation.allowed_schemes must list at least one scheme".to_string(),
            });
        }

        if let Some(scheme) = self
            .navigation
            .allowed_schemes
            .iter()
            .find(|scheme| scheme.is_empty() || scheme.contains(':'))
        {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid navigation scheme '{}'", scheme),
            });
        }

        Ok(())
    }
}
