use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;
use ua_client::ClientError;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Client {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("IO error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("CSV error in {path}: {source} {location}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
        location: ErrorLocation,
    },

    #[error("JSON error in {path}: {source} {location}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl EngineError {
    #[track_caller]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        EngineError::Configuration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EngineError::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        EngineError::Csv {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        EngineError::Json {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The client error behind this failure, if any
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ClientError> for EngineError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        Self::Client {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
