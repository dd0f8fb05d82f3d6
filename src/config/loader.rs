use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::persistence::FileStorage;

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
    /// Uses `~/.config/scriptorium/config.toml` on Linux, or the
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("scriptorium").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - Missing file → `Config::default()`.
    /// - Otherwise parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
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
    /// - The state key is a plain file stem (letters, digits, `-`, `_`, `.`)
    /// - The author name is not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        let key = &self.storage.state_key;
        let key_ok = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !key_ok {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid storage.state_key '{}'", key),
            });
        }

        if self.author.name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "author.name must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Data directory after applying the platform default.
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(FileStorage::default_dir)
    }

    /// Help page directory; defaults to `help/` next to the config file.
    pub fn help_dir(&self) -> PathBuf {
        self.help.dir.clone().unwrap_or_else(|| {
            Self::config_path()
                .parent()
                .map(|dir| dir.join("help"))
                .unwrap_or_else(|| PathBuf::from("help"))
        })
    }
}
