//! Audit trail: one CSV row per processed identity.

use crate::{EngineError, EngineResult};

use ua_core::{Operation, OperationResult};

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::info;
use serde::Serialize;

pub const AUDIT_COLUMNS: [&str; 7] = [
    "email",
    "account_id",
    "success",
    "message",
    "timestamp",
    "lifecycle_action",
    "access_action",
];

#[derive(Serialize)]
struct AuditRecord<'a> {
    email: &'a str,
    account_id: &'a str,
    success: bool,
    message: &'a str,
    timestamp: String,
    lifecycle_action: &'a str,
    access_action: &'a str,
}

impl<'a> From<&'a OperationResult> for AuditRecord<'a> {
    fn from(result: &'a OperationResult) -> Self {
        Self {
            email: &result.email,
            account_id: result.account_id.as_deref().unwrap_or(""),
            success: result.success,
            message: &result.message,
            timestamp: result.timestamp.to_rfc3339(),
            lifecycle_action: result.lifecycle_action.map(|a| a.as_str()).unwrap_or(""),
            access_action: result.access_action.map(|a| a.as_str()).unwrap_or(""),
        }
    }
}

pub fn audit_path(logs_dir: &Path, operation: Operation, at: DateTime<Local>) -> PathBuf {
    logs_dir.join(format!(
        "operation_log_{}_{}.csv",
        operation,
        at.format("%Y%m%d_%H%M%S")
    ))
}

/// Write the audit file for `results`. Returns `None` when there is nothing
/// to record.
pub fn write_audit(
    logs_dir: &Path,
    operation: Operation,
    results: &[OperationResult],
) -> EngineResult<Option<PathBuf>> {
    if results.is_empty() {
        return Ok(None);
    }

    std::fs::create_dir_all(logs_dir).map_err(|e| EngineError::io(logs_dir, e))?;
    let path = audit_path(logs_dir, operation, Local::now());

    let mut writer = csv::Writer::from_path(&path).map_err(|e| EngineError::csv(&path, e))?;
    for result in results {
        writer
            .serialize(AuditRecord::from(result))
            .map_err(|e| EngineError::csv(&path, e))?;
    }
    writer.flush().map_err(|e| EngineError::io(&path, e))?;

    info!("Audit log saved to {}", path.display());
    Ok(Some(path))
}
