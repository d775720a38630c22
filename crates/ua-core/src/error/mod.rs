use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid operation: {value} (expected 'suspend' or 'restore') {location}")]
    InvalidOperation {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid account status: {value} {location}")]
    InvalidAccountStatus {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
