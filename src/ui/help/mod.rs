//! Help panel feature module.
//!
//! Help pages are fetched from a [`HelpSource`] outside the reducer; the
//! result comes back as a [`HelpIntent`] like any other event.
//!
//! - `state.rs` - panel state enum
//! - `intent.rs` - user/system events
//! - `reducer.rs` - state transitions
//! - `source.rs` - page lookup

mod intent;
mod reducer;
mod source;
mod state;

pub use intent::HelpIntent;
pub use reducer::HelpReducer;
pub use source::{load_topic, DirectoryHelpSource, HelpError, HelpSource};
pub use state::HelpState;
