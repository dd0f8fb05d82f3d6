//! Application configuration loaded from TOML.
//!
//! ```toml
//! [storage]
//! data_dir = "/home/me/novels/first"
//! state_key = "scriptorium-state"
//!
//! [logging]
//! level = "info"
//!
//! [help]
//! dir = "/usr/share/scriptorium/help"
//!
//! [author]
//! name = "Ada"
//! ```

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AuthorConfig, Config, HelpConfig, LoggingConfig, StorageConfig};
