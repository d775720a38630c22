//! ua-cli library
//!
//! Command dispatch, logger setup and console rendering for the `ua` binary.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod output;


pub use app::{EXIT_INTERRUPTED, run};
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
