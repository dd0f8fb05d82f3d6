use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::persistence::DEFAULT_STATE_KEY;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub help: HelpConfig,
    #[serde(default)]
    pub author: AuthorConfig,
}

/// Where and under which key the manuscript is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory. Defaults to the platform data dir when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Key of the state document inside the data directory.
    #[serde(default = "default_state_key")]
    pub state_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (e.g. "info", "scriptorium=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HelpConfig {
    /// Directory containing `<topic>.md` help pages.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorConfig {
    /// Name stamped on comments created from the CLI.
    #[serde(default = "default_author_name")]
    pub name: String,
}

fn default_state_key() -> String {
    DEFAULT_STATE_KEY.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_author_name() -> String {
    "Author".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            state_key: default_state_key(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: default_author_name(),
        }
    }
}
