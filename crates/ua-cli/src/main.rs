//! ua - bulk suspend and restore of organization user accounts
//!
//! # Examples
//!
//! ```bash
//! # Preview a suspension without touching any account
//! ua suspend --csv leavers.csv --dry-run
//!
//! # Restore everyone in the roster, whatever their recorded status
//! ua restore --csv returning.csv --all --non-interactive
//!
//! # Look up a single user
//! ua search someone@example.com
//! ```

use ua_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    ua_cli::run(cli).await
}
