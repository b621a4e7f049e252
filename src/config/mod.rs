//! Configuration loading for the counter.
//!
//! The file lives at `~/.config/counter-app/config.toml`; CLI flags override
//! individual fields before validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, CounterConfig, UiConfig};
