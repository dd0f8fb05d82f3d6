//! Write-through persistence of the store to a flat key-value backend.
//!
//! ```text
//! Store ──subscribe──→ StatePersistence ──JSON──→ KeyValueStore
//!                                                 ├── MemoryStorage
//!                                                 └── FileStorage
//! ```
//!
//! Only the domain collections are stored. UI fields (open modal, codex
//! tab, viewing/editing ids) start from their defaults in a new session.

mod adapter;
mod storage;

use std::path::PathBuf;

use thiserror::Error;

pub use adapter::{StatePersistence, DEFAULT_STATE_KEY, SCHEMA_VERSION};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage};

/// Errors from reading or writing persisted state.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to access storage at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key '{key}'")]
    InvalidKey { key: String },

    #[error("Failed to decode stored state under '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Stored state has version {found}, newest supported is {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
