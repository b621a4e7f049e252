use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// `+` button or increment key.
    Increment,
    /// `-` button or decrement key.
    Decrement,
}

impl Intent for CounterIntent {}
