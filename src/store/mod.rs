//! # Store
//!
//! The single state tree of the application and the only way to change it.
//!
//! ```text
//! view ──Action──→ Store::dispatch ──→ NovelReducer::reduce ──→ AppState
//!                        │
//!                        └──→ subscribers (views, persistence)
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `AppState`, codex tabs, modal kinds
//! - [`action`]: the closed `Action` enum and payload validation
//! - [`reducer`]: `NovelReducer`, the pure transition function
//! - [`container`]: `Store` / `SharedStore`, dispatch and subscriptions
//! - [`selectors`]: read-only queries for views

pub mod action;
pub mod container;
pub mod reducer;
pub mod selectors;
pub mod state;

pub use action::{Action, ValidationError};
pub use container::{SharedStore, Store, SubscriptionId};
pub use reducer::NovelReducer;
pub use state::{AppState, CodexTab, ModalKind, DEFAULT_CHAPTER_ID};

/// The state a fresh session starts from: one empty chapter.
pub fn initial_state() -> AppState {
    AppState::initial()
}
