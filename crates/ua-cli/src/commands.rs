use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Subcommand};
use ua_config::MAX_ITEM_DELAY_MS;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suspend users (lifecycle disable + suspend access)
    Suspend(RunArgs),

    /// Restore users (lifecycle enable + restore access)
    Restore(RunArgs),

    /// Find a user by email
    Search {
        /// Email address (case-insensitive)
        email: String,
    },

    /// Show all organization users
    ShowCloudUsers {
        /// Only show users whose email contains this text (e.g. @example.com)
        #[arg(long = "filter")]
        filter: Option<String>,
    },

    /// Verify credentials and list the organization's directories
    CheckConnection,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Path to the roster CSV (default from configuration)
    #[arg(long = "csv")]
    pub csv: Option<PathBuf>,

    /// Test mode - process only the first user
    #[arg(long)]
    pub test: bool,

    /// Check mode - resolve users but change nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Ignore the roster's status column and process every user
    #[arg(long = "all")]
    pub ignore_status: bool,

    /// Skip confirmation prompts and resume checkpoints automatically
    #[arg(long)]
    pub non_interactive: bool,

    /// Delay between users in seconds (default from configuration)
    #[arg(long, value_parser = parse_delay)]
    pub delay: Option<Duration>,
}

/// Non-negative number of seconds, at most [`MAX_ITEM_DELAY_MS`].
pub fn parse_delay(value: &str) -> Result<Duration, String> {
    let secs: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number of seconds"))?;

    let delay = Duration::try_from_secs_f64(secs)
        .map_err(|_| format!("delay must be a non-negative number of seconds, got {value}"))?;

    let max = Duration::from_millis(MAX_ITEM_DELAY_MS);
    if delay > max {
        return Err(format!(
            "delay must be at most {} seconds, got {value}",
            max.as_secs()
        ));
    }

    Ok(delay)
}
