use crate::{DEFAULT_LOG_LEVEL, LogLevel};

use log::LevelFilter;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored console output
    pub colored: bool,
    /// Debug mode: forces debug level and logs request/response summaries
    pub debug: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: true,
            debug: false,
        }
    }
}

impl LoggingConfig {
    /// Level actually applied to the dispatcher.
    pub fn effective_level(&self) -> LevelFilter {
        if self.debug && self.level.0 < LevelFilter::Debug {
            LevelFilter::Debug
        } else {
            self.level.0
        }
    }
}
