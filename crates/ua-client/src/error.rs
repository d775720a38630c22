use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the directory client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Authentication error: {message} {location}")]
    Authentication {
        message: String,
        location: ErrorLocation,
    },

    #[error("Service error: {message} (HTTP {status}) {location}")]
    Service {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("No directories found in organization {location}")]
    NoDirectories { location: ErrorLocation },

    #[error("Rate limit exceeded: {partial} {location}")]
    RateLimited {
        /// Outcome of the other sub-call, if it had already run
        partial: String,
        location: ErrorLocation,
    },

    #[error("Network error after {attempts} attempts: {message} {location}")]
    Network {
        attempts: u32,
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Invalid URL {url}: {message} {location}")]
    Url {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP client setup failed: {message} {location}")]
    Setup {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    #[track_caller]
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        ClientError::Authentication {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn service<S: Into<String>>(status: u16, message: S) -> Self {
        ClientError::Service {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_directories() -> Self {
        ClientError::NoDirectories {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rate_limited<S: Into<String>>(partial: S) -> Self {
        ClientError::RateLimited {
            partial: partial.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Retries exhausted; carries the last underlying failure
    #[track_caller]
    pub fn network(attempts: u32, source: Option<reqwest::Error>) -> Self {
        let message = source
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no attempt was made".to_string());
        ClientError::Network {
            attempts,
            message,
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn url<S: Into<String>>(url: S, message: impl std::fmt::Display) -> Self {
        ClientError::Url {
            url: url.into(),
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn setup(err: reqwest::Error) -> Self {
        ClientError::Setup {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: reqwest::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ClientError::RateLimited { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network { .. })
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
