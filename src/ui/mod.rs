//! View-facing helpers that sit between input handling and the store.
//!
//! - [`help`]: help panel state, intents and page lookup
//! - [`mentions`]: `@mention` autocomplete over codex characters

pub mod help;
pub mod mentions;
