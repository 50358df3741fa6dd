//! TOML configuration loading and validation.

use std::path::{Path, PathBuf};
use std::time::Duration;

use pnl_ledger::DEFAULT_UTC_OFFSET_HOURS;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub day: DayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DayConfig {
    #[serde(default = "default_offset")]
    pub utc_offset_hours: i32,
    #[serde(default = "default_fallback_balance")]
    pub fallback_start_balance: f64,
}

fn default_offset() -> i32 {
    DEFAULT_UTC_OFFSET_HOURS
}
fn default_fallback_balance() -> f64 {
    500.0
}

impl Default for DayConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_offset(),
            fallback_start_balance: default_fallback_balance(),
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&contents)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(Error::Config("api.base_url must not be empty".into()));
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(Error::Config(
                "api.base_url must start with http:// or https://".into(),
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(Error::Config("api.timeout_secs must be > 0".into()));
        }
        if self.store.path.as_os_str().is_empty() {
            return Err(Error::Config("store.path must not be empty".into()));
        }
        if !(-23..=23).contains(&self.day.utc_offset_hours) {
            return Err(Error::Config(
                "day.utc_offset_hours must be in [-23, 23]".into(),
            ));
        }
        if !self.day.fallback_start_balance.is_finite() || self.day.fallback_start_balance < 0.0 {
            return Err(Error::Config(
                "day.fallback_start_balance must be >= 0".into(),
            ));
        }
        Ok(())
    }

    /// Per-request timeout for the account service.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }
}
