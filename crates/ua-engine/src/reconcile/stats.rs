use ua_core::OperationResult;

use serde::Serialize;

/// Counters of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub successful: usize,
    pub failed: usize,
    pub total: usize,
    pub lifecycle_applied: usize,
    pub access_applied: usize,
}

impl RunStats {
    pub fn from_results(results: &[OperationResult]) -> Self {
        results.iter().fold(Self::default(), |mut stats, result| {
            stats.total += 1;
            if result.success {
                stats.successful += 1;
            } else {
                stats.failed += 1;
            }
            if result.lifecycle_action.is_some() {
                stats.lifecycle_applied += 1;
            }
            if result.access_action.is_some() {
                stats.access_applied += 1;
            }
            stats
        })
    }
}
