mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod retry_config;
mod run_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use retry_config::RetryConfig;
pub use run_config::{MAX_ITEM_DELAY_MS, RunConfig};

const DEFAULT_API_BASE_URL: &str = "https://api.atlassian.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_ROSTER_FILE: &str = "users.csv";
const DEFAULT_ITEM_DELAY_MS: u64 = 500;
const DEFAULT_LOGS_DIR: &str = "logs";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const CONFIG_DIR_NAME: &str = ".ua";
const CONFIG_FILE_NAME: &str = "config.toml";
