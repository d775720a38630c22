//! One complete roster job: load, run, audit, rewrite.

use crate::{
    BatchRunner, EngineError, EngineResult, LoadStats, Prompt, RosterUpdate, RunOptions,
    RunOutcome, RunReporter, RunStats, load_roster, rewrite_roster, write_audit,
};

use ua_client::DirectoryClient;
use ua_core::StatusFilter;

use std::path::PathBuf;

use log::{info, warn};

#[derive(Debug, Clone)]
pub struct RosterJob {
    pub roster: PathBuf,
    /// Process every row regardless of its status text
    pub ignore_status: bool,
    /// Only process the first identity of the roster
    pub test_mode: bool,
    pub options: RunOptions,
}

#[derive(Debug)]
pub struct SessionReport {
    pub load: LoadStats,
    pub outcome: RunOutcome,
    pub stats: RunStats,
    pub audit_file: Option<PathBuf>,
    /// `None` when no rewrite was attempted or it failed
    pub roster_update: Option<RosterUpdate>,
}

pub async fn process_roster(
    client: &dyn DirectoryClient,
    job: RosterJob,
    prompt: &mut dyn Prompt,
    reporter: &dyn RunReporter,
) -> EngineResult<SessionReport> {
    if !job.roster.exists() {
        return Err(EngineError::configuration(format!(
            "File {} not found",
            job.roster.display()
        )));
    }

    let operation = job.options.operation;
    let dry_run = job.options.dry_run;
    let logs_dir = job.options.logs_dir.clone();

    let filter = StatusFilter::for_operation(operation, job.ignore_status);
    let loaded = load_roster(&job.roster, filter)?;

    let mut identities = loaded.identities;
    if job.test_mode {
        info!("Test mode: only the first user will be processed");
        identities.truncate(1);
    }

    let mut runner = BatchRunner::new(client, job.options, prompt, reporter);
    let outcome = runner.run(identities).await?;

    let results = outcome.results();
    let stats = RunStats::from_results(results);

    let audit_file = match write_audit(&logs_dir, operation, results) {
        Ok(path) => path,
        Err(e) => {
            warn!("Failed to write audit log: {e}");
            None
        }
    };

    let roster_update = if !dry_run && stats.successful > 0 {
        match rewrite_roster(&job.roster, operation, results) {
            Ok(update) => Some(update),
            Err(e) => {
                warn!("Failed to update {}: {e}", job.roster.display());
                None
            }
        }
    } else {
        None
    };

    Ok(SessionReport {
        load: loaded.stats,
        outcome,
        stats,
        audit_file,
        roster_update,
    })
}
