use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use ua_client::ClientError;
use ua_config::ConfigError;
use ua_engine::EngineError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{source}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Client {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Engine {
        #[source]
        source: EngineError,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for CliError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        Self::Client {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<EngineError> for CliError {
    #[track_caller]
    fn from(source: EngineError) -> Self {
        Self::Engine {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
