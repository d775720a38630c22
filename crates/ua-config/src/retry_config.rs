use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Retry constraints
pub const MIN_MAX_ATTEMPTS: u32 = 1;
pub const MAX_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

pub const MAX_DELAY_MS: u64 = 60_000;
pub const DEFAULT_DELAY_MS: u64 = 1_000;

/// Low-level request retry policy.
///
/// Network failures wait a fixed `delay_ms`; HTTP 429 responses wait
/// `delay_ms * attempt`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts per request (including the first)
    pub max_attempts: u32,
    /// Base delay between attempts in milliseconds
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl RetryConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_attempts < MIN_MAX_ATTEMPTS || self.max_attempts > MAX_MAX_ATTEMPTS {
            return Err(ConfigError::config(format!(
                "retry.max_attempts must be {}-{}, got {}",
                MIN_MAX_ATTEMPTS, MAX_MAX_ATTEMPTS, self.max_attempts
            )));
        }

        if self.delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::config(format!(
                "retry.delay_ms must be at most {}, got {}",
                MAX_DELAY_MS, self.delay_ms
            )));
        }

        Ok(())
    }
}
