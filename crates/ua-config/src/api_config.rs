use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Connection settings for the remote directory service.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Service root, e.g. "https://api.atlassian.com"
    pub base_url: String,
    /// Organization whose directories are managed
    pub org_id: String,
    /// Bearer credential, passed through untouched
    pub api_key: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            org_id: String::new(),
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// Hand-written so the API key never ends up in a log line.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("org_id", &self.org_id)
            .field("api_key", &self.masked_api_key())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Last four characters of the key behind a fixed mask.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("{}{}", "*".repeat(10), tail)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.org_id.trim().is_empty() || self.api_key.trim().is_empty() {
            return Err(ConfigError::auth(
                "UA_ORG_ID and UA_API_KEY must both be set",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::config(format!(
                "api.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::config(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
