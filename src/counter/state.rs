use super::category::{display_category, Category};
use super::effect::Transition;

pub const DEFAULT_VALUE: i64 = 0;
pub const DEFAULT_MIN: i64 = -5;
pub const DEFAULT_MAX: i64 = 5;

/// Position of the value relative to its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// `value == min`, decrement disabled.
    AtMin,
    /// Both directions enabled.
    Interior,
    /// `value == max`, increment disabled.
    AtMax,
}

/// Counter value with inclusive bounds.
///
/// `min <= value <= max` holds after every operation. Construction with
/// inverted bounds or an out-of-range value is a caller error; the config
/// layer rejects those before a state is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    value: i64,
    min: i64,
    max: i64,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(DEFAULT_VALUE, DEFAULT_MIN, DEFAULT_MAX)
    }
}

impl CounterState {
    pub fn new(value: i64, min: i64, max: i64) -> Self {
        debug_assert!(min <= max, "counter bounds inverted: {min} > {max}");
        debug_assert!(
            (min..=max).contains(&value),
            "counter value {value} outside [{min}, {max}]"
        );
        Self { value, min, max }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Step up by one unless already at `max`.
    pub fn increment(&mut self) -> Transition {
        let old = self.value;
        if self.value < self.max {
            self.value += 1;
        }
        Transition::new(old, self.value)
    }

    /// Step down by one unless already at `min`.
    pub fn decrement(&mut self) -> Transition {
        let old = self.value;
        if self.value > self.min {
            self.value -= 1;
        }
        Transition::new(old, self.value)
    }

    pub fn can_increment(&self) -> bool {
        self.value < self.max
    }

    pub fn can_decrement(&self) -> bool {
        self.value > self.min
    }

    pub fn category(&self) -> Category {
        display_category(self.value, self.min, self.max)
    }

    pub fn boundary(&self) -> Boundary {
        if self.value <= self.min {
            Boundary::AtMin
        } else if self.value >= self.max {
            Boundary::AtMax
        } else {
            Boundary::Interior
        }
    }
}
