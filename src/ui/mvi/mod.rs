//! Model-View-Intent primitives for the counter UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────── key press ───────┘
//! ```
//!
//! Reducers are pure; side effects such as the celebration burst are run by
//! [`crate::ui::app::App`] after comparing the old and new state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
