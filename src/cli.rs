//! Command-line flags layered over the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "counter-app")]
#[command(version, about = "Bounded counter in the terminal", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/counter-app/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial counter value
    #[arg(long, allow_negative_numbers = true)]
    pub value: Option<i64>,

    /// Inclusive lower bound
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Inclusive upper bound
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(value) = self.value {
            config.counter.initial = value;
        }
        if let Some(min) = self.min {
            config.counter.min = min;
        }
        if let Some(max) = self.max {
            config.counter.max = max;
        }
    }

    /// Load the config file, apply flag overrides, then validate.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }
}
