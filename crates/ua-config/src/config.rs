use crate::{
    ApiConfig, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, LoggingConfig,
    RetryConfig, RunConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

/// Immutable configuration bundle handed to every component at construction.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub retry: RetryConfig,
    pub run: RunConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from file and environment.
    ///
    /// Loading order:
    /// 1. Check for UA_CONFIG_DIR env var, else use ./.ua/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply UA_* environment variable overrides
    ///
    /// A `.env` file is NOT read here; the binary calls `dotenvy` first so
    /// that its values show up as ordinary environment variables.
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);
        Self::load_from(&config_path)
    }

    /// Load from an explicit config file path (missing file = defaults).
    pub fn load_from(config_path: &Path) -> ConfigErrorResult<Self> {
        let mut config = if config_path.exists() {
            Self::load_toml(config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load `.env` from the working directory (if any), then `load()`.
    pub fn load_with_dotenv() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: UA_CONFIG_DIR env var > ./.ua/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("UA_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors before any remote call.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.retry.validate()?;
        self.run.validate()?;

        Ok(())
    }

    /// Log configuration summary (NEVER logs the API key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (org {}, timeout {}s, key {})",
            self.api.base_url,
            self.api.org_id,
            self.api.timeout_secs,
            self.api.masked_api_key()
        );
        info!(
            "  retry: attempts={}, delay={}ms",
            self.retry.max_attempts, self.retry.delay_ms
        );
        info!(
            "  run: roster={}, delay={}ms, logs={}, non_interactive={}",
            self.run.default_roster,
            self.run.default_delay_ms,
            self.run.logs_dir,
            self.run.non_interactive
        );
        info!(
            "  logging: {} (colored: {}, debug: {})",
            self.logging.effective_level(),
            self.logging.colored,
            self.logging.debug
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("UA_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_string("UA_ORG_ID", &mut self.api.org_id);
        Self::apply_env_string("UA_API_KEY", &mut self.api.api_key);
        Self::apply_env_parse("UA_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Retry
        Self::apply_env_parse("UA_MAX_RETRIES", &mut self.retry.max_attempts);
        Self::apply_env_parse("UA_RETRY_DELAY_MS", &mut self.retry.delay_ms);

        // Run
        Self::apply_env_string("UA_DEFAULT_ROSTER", &mut self.run.default_roster);
        Self::apply_env_parse("UA_DEFAULT_DELAY_MS", &mut self.run.default_delay_ms);
        Self::apply_env_string("UA_LOGS_DIR", &mut self.run.logs_dir);
        Self::apply_env_bool("UA_NON_INTERACTIVE", &mut self.run.non_interactive);

        // Logging
        Self::apply_env_parse("UA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("UA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_bool("UA_DEBUG", &mut self.logging.debug);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val.eq_ignore_ascii_case("true") || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }
}
