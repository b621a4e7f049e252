use serde::{Deserialize, Serialize};

use crate::counter::{CounterState, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_VALUE};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Initial value and inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Value shown at startup (default: 0).
    #[serde(default = "default_initial")]
    pub initial: i64,
    /// Inclusive lower bound (default: -5).
    #[serde(default = "default_min")]
    pub min: i64,
    /// Inclusive upper bound (default: 5).
    #[serde(default = "default_max")]
    pub max: i64,
}

/// Terminal UI timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll and animation tick in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How many ticks a confetti burst lasts (default: 20).
    #[serde(default = "default_confetti_ticks")]
    pub confetti_ticks: u32,
}

fn default_initial() -> i64 {
    DEFAULT_VALUE
}

fn default_min() -> i64 {
    DEFAULT_MIN
}

fn default_max() -> i64 {
    DEFAULT_MAX
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_confetti_ticks() -> u32 {
    20
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial: default_initial(),
            min: default_min(),
            max: default_max(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            confetti_ticks: default_confetti_ticks(),
        }
    }
}

impl CounterConfig {
    /// Build the counter state. Call after [`Config::validate`].
    pub fn to_state(&self) -> CounterState {
        CounterState::new(self.initial, self.min, self.max)
    }
}
