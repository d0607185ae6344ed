use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, LOG_LEVELS};

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
    /// Uses `simple-counter/config.toml` under `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("simple-counter").join("config.toml")
    }

    /// Loads and validates configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads configuration from `path` without validating it, so callers can
    /// apply overrides first.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
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

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both actuators have at least one key
    /// - No key is bound to both actuators
    /// - No key shadows a quit or focus key
    /// - The logging level is known
    pub fn validate(&self) -> Result<(), ConfigError> {
        let keys = &self.keys;
        if keys.increment.is_empty() || keys.decrement.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Both increment and decrement need at least one key".to_string(),
            });
        }

        if let Some(shared) = keys.increment.iter().find(|k| keys.decrement.contains(*k)) {
            return Err(ConfigError::ValidationError {
                message: format!("Key '{}' is bound to both increment and decrement", shared),
            });
        }

        let all = keys.increment.iter().chain(keys.decrement.iter());
        if let Some(reserved) = all.copied().find(|k| k.is_reserved()) {
            return Err(ConfigError::ValidationError {
                message: format!("Key '{}' is reserved and cannot be rebound", reserved),
            });
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Unknown logging level '{}' (expected one of: {})",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }
}
