use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create an auth error (missing or unusable credentials)
    #[track_caller]
    pub fn auth<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Auth",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Config",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the error is about missing credentials, so callers can
    /// print setup instructions instead of a bare message.
    pub fn is_auth(&self) -> bool {
        matches!(self, ConfigError::Generic { category: "Auth", .. })
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
