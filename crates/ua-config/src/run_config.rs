use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ITEM_DELAY_MS, DEFAULT_LOGS_DIR, DEFAULT_ROSTER_FILE,
};

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

pub const MAX_ITEM_DELAY_MS: u64 = 60_000;

/// Defaults for batch runs; command-line flags override them per run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Roster used when --csv is not given
    pub default_roster: String,
    /// Pause between live items in milliseconds
    pub default_delay_ms: u64,
    /// Directory for checkpoints, audit files and log files
    pub logs_dir: String,
    /// Never prompt; resume checkpoints and confirm automatically
    pub non_interactive: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            default_roster: String::from(DEFAULT_ROSTER_FILE),
            default_delay_ms: DEFAULT_ITEM_DELAY_MS,
            logs_dir: String::from(DEFAULT_LOGS_DIR),
            non_interactive: false,
        }
    }
}

impl RunConfig {
    pub fn default_delay(&self) -> Duration {
        Duration::from_millis(self.default_delay_ms)
    }

    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.logs_dir)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_delay_ms > MAX_ITEM_DELAY_MS {
            return Err(ConfigError::config(format!(
                "run.default_delay_ms must be at most {}, got {}",
                MAX_ITEM_DELAY_MS, self.default_delay_ms
            )));
        }

        if self.logs_dir.trim().is_empty() {
            return Err(ConfigError::config("run.logs_dir cannot be empty"));
        }

        Ok(())
    }
}
