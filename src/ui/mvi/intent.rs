//! Marker trait for intents.

/// A user action (key press, button activation) waiting to be reduced.
pub trait Intent: Send + 'static {}
