use crate::cli::Cli;
use crate::commands::{Commands, RunArgs};
use crate::output::{
    CONNECTION_RECOMMENDATIONS, ConsoleReporter, SETUP_INSTRUCTIONS, format_run_summary,
    format_user_details, format_user_table,
};
use crate::{CliResult, logger};

use ua_client::{DirectoryClient, HttpDirectoryClient};
use ua_config::Config;
use ua_core::Operation;
use ua_engine::{RosterJob, RunOptions, RunOutcome, StdinPrompt, process_roster};

use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info};

/// Exit status after Ctrl-C.
pub const EXIT_INTERRUPTED: u8 = 130;

pub async fn run(cli: Cli) -> ExitCode {
    let config = match Config::load_with_dotenv() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = config.validate() {
        if e.is_auth() {
            eprintln!("{SETUP_INSTRUCTIONS}");
        } else {
            eprintln!("Error: {e}");
        }
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(&config.logging, &config.run.logs_dir()) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let task = tokio::spawn(execute(cli.command, config));

    tokio::select! {
        joined = task => match joined {
            Ok(Ok(())) => ExitCode::SUCCESS,
            Ok(Err(e)) => {
                error!("{e}");
                ExitCode::FAILURE
            }
            Err(e) => {
                error!("Command task failed: {e}");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            println!("\n\n⚠️ Operation interrupted by user");
            // A pending stdin prompt would keep the runtime from shutting down.
            std::process::exit(i32::from(EXIT_INTERRUPTED));
        }
    }
}

async fn execute(command: Commands, config: Config) -> CliResult<()> {
    let client = HttpDirectoryClient::new(&config.api, &config.retry)?;

    println!("🔒 Verifying credentials...");
    client.verify_credentials().await?;
    println!("✓ Credentials verified successfully");
    println!("   Organization: {}\n", config.api.org_id);

    match command {
        Commands::Suspend(args) => run_batch(&client, &config, Operation::Suspend, args).await,
        Commands::Restore(args) => run_batch(&client, &config, Operation::Restore, args).await,
        Commands::Search { email } => search(&client, &email).await,
        Commands::ShowCloudUsers { filter } => show_users(&client, filter.as_deref()).await,
        Commands::CheckConnection => check_connection(&client, &config).await,
    }
}

async fn run_batch(
    client: &dyn DirectoryClient,
    config: &Config,
    operation: Operation,
    args: RunArgs,
) -> CliResult<()> {
    let job = RosterJob {
        roster: args
            .csv
            .unwrap_or_else(|| PathBuf::from(&config.run.default_roster)),
        ignore_status: args.ignore_status,
        test_mode: args.test,
        options: RunOptions {
            operation,
            dry_run: args.dry_run,
            non_interactive: args.non_interactive || config.run.non_interactive,
            delay: args.delay.unwrap_or_else(|| config.run.default_delay()),
            logs_dir: config.run.logs_dir(),
        },
    };
    let dry_run = job.options.dry_run;

    if job.test_mode {
        println!("⚠️  TEST MODE: only the first user will be processed");
    }

    let mut prompt = StdinPrompt;
    let report = process_roster(client, job, &mut prompt, &ConsoleReporter).await?;

    match &report.outcome {
        RunOutcome::Completed(_) => {
            if let Some(path) = &report.audit_file {
                println!("\n📄 Log saved to file: {}", path.display());
            }
            println!("\n{}", format_run_summary(&report.stats, operation, dry_run));
            if let Some(update) = report.roster_update.as_ref().filter(|u| u.written) {
                println!("✓ Updated data for {} users in the roster", update.matched);
            }
        }
        RunOutcome::AllProcessed => {
            println!("\n✓ All users already processed for operation {operation}!");
        }
        RunOutcome::Declined => println!("Operation cancelled"),
        RunOutcome::Empty => println!("No users to process"),
    }

    Ok(())
}

async fn search(client: &dyn DirectoryClient, email: &str) -> CliResult<()> {
    info!("Searching for user {email}");

    match client.find_by_email(email).await? {
        Some(user) => println!("\n{}", format_user_details(&user)),
        None => println!("✗ User {email} not found"),
    }

    Ok(())
}

async fn show_users(client: &dyn DirectoryClient, filter: Option<&str>) -> CliResult<()> {
    let users = client.list_all_users().await?;
    let directories = client.list_directories().await?;

    let shown: Vec<_> = match filter {
        Some(text) => {
            let text = text.to_lowercase();
            users
                .iter()
                .filter(|u| u.email.to_lowercase().contains(&text))
                .cloned()
                .collect()
        }
        None => users.clone(),
    };

    let mut title = String::from("Organization users");
    if let Some(text) = filter {
        title.push_str(&format!(" (filter: '{text}')"));
    }
    title.push_str(&format!(" - shown: {} of {}", shown.len(), users.len()));

    println!("{}", format_user_table(&shown, &title, &directories));
    Ok(())
}

async fn check_connection(client: &HttpDirectoryClient, config: &Config) -> CliResult<()> {
    println!("📋 Organization ID: {}", config.api.org_id);
    println!("🔑 API Key: {}", config.api.masked_api_key());

    let directories = client.list_directories().await?;
    println!("✓ Organization access: {} directories", directories.len());
    for directory in &directories {
        println!("   - {} ({})", directory.name, directory.directory_id);
    }

    match client.check_user_management().await {
        Ok(count) => {
            println!("✓ User management access: {count} user(s) readable");
            Ok(())
        }
        Err(e) => {
            println!("✗ User management access: {e}");
            println!("\n{CONNECTION_RECOMMENDATIONS}");
            Err(e.into())
        }
    }
}
