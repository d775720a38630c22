use ua_core::{Identity, Operation, OperationResult};

const PREVIEW_LEN: usize = 5;

/// What the confirmation gate shows before a batch starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPreview {
    pub operation: Operation,
    pub dry_run: bool,
    pub total: usize,
    /// First few entries as `email` or `email (name)`
    pub shown: Vec<String>,
    /// Entries not listed in `shown`
    pub remaining: usize,
}

impl BatchPreview {
    pub fn new(identities: &[Identity], operation: Operation, dry_run: bool) -> Self {
        let shown = identities
            .iter()
            .take(PREVIEW_LEN)
            .map(|identity| match identity.display_name.as_deref() {
                Some(name) if !name.is_empty() => format!("{} ({})", identity.email, name),
                _ => identity.email.clone(),
            })
            .collect();

        Self {
            operation,
            dry_run,
            total: identities.len(),
            shown,
            remaining: identities.len().saturating_sub(PREVIEW_LEN),
        }
    }

    /// "suspended", or "checked for suspension" on a dry run.
    pub fn action(&self) -> &'static str {
        match (self.operation, self.dry_run) {
            (Operation::Suspend, false) => "suspended",
            (Operation::Suspend, true) => "checked for suspension",
            (Operation::Restore, false) => "restored",
            (Operation::Restore, true) => "checked for restoration",
        }
    }
}

/// Progress callbacks of a batch run. Every method defaults to a no-op.
pub trait RunReporter: Send + Sync {
    /// A checkpoint with `processed` entries was found and will be used.
    fn resuming(&self, _processed: usize) {}

    /// Shown before the confirmation question.
    fn preview(&self, _preview: &BatchPreview) {}

    fn started(&self, _total: usize, _operation: Operation, _dry_run: bool) {}

    fn item_finished(&self, _index: usize, _total: usize, _result: &OperationResult) {}
}

#[derive(Debug, Default)]
pub struct SilentReporter;

impl RunReporter for SilentReporter {}
