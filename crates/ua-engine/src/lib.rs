//! ua-engine
//!
//! Batch reconciliation engine: loads a roster, resolves each row against
//! the directory service, applies the operation with resumable progress and
//! writes back an audit trail and the updated roster.

pub mod checkpoint;
pub mod error;
pub mod prompt;
pub mod reconcile;
pub mod roster;
pub mod runner;
pub mod session;

#[cfg(test)]
mod tests;

pub use checkpoint::Checkpoint;
pub use error::{EngineError, Result as EngineResult};
pub use prompt::{AutoConfirm, Prompt, StdinPrompt, is_affirmative};
pub use reconcile::audit::{AUDIT_COLUMNS, write_audit};
pub use reconcile::roster_writer::{RosterUpdate, rewrite_roster};
pub use reconcile::stats::RunStats;
pub use roster::columns::RosterColumns;
pub use roster::loader::{LoadStats, LoadedRoster, load_roster};
pub use runner::reporter::{BatchPreview, RunReporter, SilentReporter};
pub use runner::{BatchRunner, RunOptions, RunOutcome};
pub use session::{RosterJob, SessionReport, process_roster};
