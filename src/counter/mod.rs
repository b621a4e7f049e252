//! Bounded counter core.
//!
//! Owns the value and its inclusive bounds, clamps transitions, and maps the
//! current value to a display [`Category`]. Nothing in here knows how the
//! counter is drawn; the UI layer reads these types and renders them.

mod category;
mod effect;
mod state;

pub use category::{display_category, Category};
pub use effect::{should_trigger_effect, CelebrationEffect, Transition, CELEBRATION_VALUE};
pub use state::{Boundary, CounterState, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_VALUE};
