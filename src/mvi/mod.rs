//! Unidirectional data-flow primitives shared by the store and the help
//! panel.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ subscribers (views, persistence)
//!    ↑                                   │
//!    └───────────────────────────────────┘
//! ```
//!
//! - **State**: a plain value describing everything a view needs
//! - **Intent**: a closed set of things that can happen
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
