//! # Scriptorium
//!
//! State core of a novel-writing application: a manuscript of chapters
//! with comments and suggestions, a codex of characters, timeline events
//! and relationships, and the UI flags that drive the codex panel and
//! metadata modals.
//!
//! ```text
//!   view / CLI ──Action──→ store::Store ──→ store::NovelReducer
//!                               │
//!                               └──→ persistence::StatePersistence ──→ KeyValueStore
//! ```
//!
//! No I/O happens inside the reducer. Help pages and persistence live at
//! the edges and talk to the core through actions and subscriptions.

pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod persistence;
pub mod store;
pub mod ui;
