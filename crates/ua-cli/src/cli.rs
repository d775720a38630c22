use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ua")]
#[command(about = "Bulk suspend and restore of organization user accounts")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
