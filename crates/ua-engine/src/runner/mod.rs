//! Resumable batch runner.
//!
//! A run walks the pending identities one at a time:
//! resolve (if no account id) -> apply (or dry-run) -> record -> checkpoint.
//! The checkpoint is flushed every [`CHECKPOINT_INTERVAL`] items and once
//! more if the run aborts; a completed run deletes it.

pub mod reporter;

use crate::runner::reporter::{BatchPreview, RunReporter};
use crate::{Checkpoint, EngineResult, Prompt};

use ua_client::{ClientError, DirectoryClient};
use ua_core::{Identity, Operation, OperationOutcome, OperationResult};

use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::time::sleep;

pub const CHECKPOINT_INTERVAL: usize = 10;

/// Upper bound for the pause before retrying a rate-limited item.
pub const MAX_RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub operation: Operation,
    pub dry_run: bool,
    pub non_interactive: bool,
    /// Pause between live items
    pub delay: Duration,
    /// Directory holding the checkpoint file
    pub logs_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The batch ran to the end; one result per pending identity.
    Completed(Vec<OperationResult>),
    /// Every identity was already in the checkpoint.
    AllProcessed,
    /// The confirmation was declined; nothing was changed.
    Declined,
    /// The roster produced no identities.
    Empty,
}

impl RunOutcome {
    pub fn results(&self) -> &[OperationResult] {
        match self {
            Self::Completed(results) => results,
            _ => &[],
        }
    }
}

pub struct BatchRunner<'a> {
    client: &'a dyn DirectoryClient,
    options: RunOptions,
    prompt: &'a mut dyn Prompt,
    reporter: &'a dyn RunReporter,
}

impl<'a> BatchRunner<'a> {
    pub fn new(
        client: &'a dyn DirectoryClient,
        options: RunOptions,
        prompt: &'a mut dyn Prompt,
        reporter: &'a dyn RunReporter,
    ) -> Self {
        Self {
            client,
            options,
            prompt,
            reporter,
        }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    pub async fn run(&mut self, identities: Vec<Identity>) -> EngineResult<RunOutcome> {
        if identities.is_empty() {
            info!("No users to process for operation {}", self.options.operation);
            return Ok(RunOutcome::Empty);
        }

        let mut checkpoint = self.open_checkpoint();

        let pending: Vec<Identity> = identities
            .into_iter()
            .filter(|identity| !checkpoint.contains(&identity.email))
            .collect();

        if pending.is_empty() {
            info!(
                "All users already processed for operation {}",
                self.options.operation
            );
            discard(&checkpoint);
            return Ok(RunOutcome::AllProcessed);
        }

        if !self.confirm(&pending) {
            info!("Operation {} cancelled", self.options.operation);
            return Ok(RunOutcome::Declined);
        }

        self.reporter
            .started(pending.len(), self.options.operation, self.options.dry_run);

        let mut results = Vec::with_capacity(pending.len());
        match self.process_all(pending, &mut checkpoint, &mut results).await {
            Ok(()) => {
                discard(&checkpoint);
                Ok(RunOutcome::Completed(results))
            }
            Err(e) => {
                match checkpoint.save() {
                    Ok(()) => warn!(
                        "Run aborted, progress saved to {} ({} users)",
                        checkpoint.path().display(),
                        checkpoint.len()
                    ),
                    Err(save_err) => warn!("Run aborted and progress could not be saved: {save_err}"),
                }
                Err(e)
            }
        }
    }

    /// Load the checkpoint and decide whether to resume from it.
    fn open_checkpoint(&mut self) -> Checkpoint {
        let path = Checkpoint::path_for(&self.options.logs_dir, self.options.operation);
        let mut checkpoint = Checkpoint::load(path);

        if checkpoint.is_empty() {
            return checkpoint;
        }

        let resume = if self.options.non_interactive {
            info!(
                "Found resume file with {} processed users, resuming automatically",
                checkpoint.len()
            );
            true
        } else {
            self.prompt.confirm(&format!(
                "Found resume file with {} processed users. Continue from where you left off?",
                checkpoint.len()
            ))
        };

        if resume {
            self.reporter.resuming(checkpoint.len());
        } else {
            checkpoint.clear();
            discard(&checkpoint);
        }

        checkpoint
    }

    fn confirm(&mut self, pending: &[Identity]) -> bool {
        let preview = BatchPreview::new(pending, self.options.operation, self.options.dry_run);
        self.reporter.preview(&preview);

        if self.options.non_interactive {
            info!("Non-interactive mode: proceeding automatically");
            return true;
        }

        self.prompt.confirm("Continue?")
    }

    async fn process_all(
        &self,
        pending: Vec<Identity>,
        checkpoint: &mut Checkpoint,
        results: &mut Vec<OperationResult>,
    ) -> EngineResult<()> {
        let total = pending.len();

        for (index, identity) in pending.into_iter().enumerate() {
            let result = self.process_one(identity).await?;

            checkpoint.insert(&result.email);
            self.reporter.item_finished(index + 1, total, &result);
            results.push(result);

            if results.len() % CHECKPOINT_INTERVAL == 0
                && let Err(e) = checkpoint.save()
            {
                warn!("Failed to save checkpoint: {e}");
            }

            if !self.options.dry_run && index + 1 < total {
                sleep(self.options.delay).await;
            }
        }

        Ok(())
    }

    async fn process_one(&self, mut identity: Identity) -> EngineResult<OperationResult> {
        let operation = self.options.operation;

        if !identity.has_account_id() {
            match self.client.find_by_email(&identity.email).await {
                Ok(Some(found)) => identity.enrich_from(&found),
                Ok(None) => {
                    debug!("{} not found in any directory", identity.email);
                    return Ok(OperationResult::not_found(identity));
                }
                Err(e) if e.is_network() => return Err(e.into()),
                Err(e) => {
                    warn!("Lookup of {} failed: {e}", identity.email);
                    let message = lookup_failure(&e);
                    return Ok(OperationResult::failed(identity, message));
                }
            }
        }

        if self.options.dry_run {
            return Ok(OperationResult::dry_run(identity, operation));
        }

        let Some(account_id) = identity.account_id.clone().filter(|id| !id.is_empty()) else {
            return Ok(OperationResult::failed(
                identity,
                "Directory entry has no account id",
            ));
        };

        let outcome = self.apply_with_retry(&account_id, operation).await?;
        Ok(OperationResult::applied(identity, outcome))
    }

    /// Apply once; on a rate limit back off and try exactly one more time.
    async fn apply_with_retry(
        &self,
        account_id: &str,
        operation: Operation,
    ) -> EngineResult<OperationOutcome> {
        let message = operation.audit_message();

        match self.client.apply_operation(account_id, operation, &message).await {
            Ok(outcome) => Ok(outcome),
            Err(e) if e.is_rate_limited() => {
                let backoff = self.options.delay.saturating_mul(2).min(MAX_RATE_LIMIT_BACKOFF);
                warn!("Rate limit exceeded for {account_id}, retrying once in {backoff:?}");
                sleep(backoff).await;
                Ok(self
                    .client
                    .apply_operation(account_id, operation, &message)
                    .await?)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn lookup_failure(error: &ClientError) -> String {
    match error {
        ClientError::Service {
            status, message, ..
        } => format!("Lookup failed: {message} (HTTP {status})"),
        ClientError::Authentication { message, .. } => format!("Lookup failed: {message}"),
        other => format!("Lookup failed: {other}"),
    }
}

fn discard(checkpoint: &Checkpoint) {
    if let Err(e) = checkpoint.remove() {
        warn!("Failed to remove checkpoint: {e}");
    }
}
