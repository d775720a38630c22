use crate::{AccessAction, Identity, LifecycleAction, Operation, OperationOutcome};

use chrono::{DateTime, Local};
use serde::Serialize;

pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// One processed identity within a run.
#[derive(Debug, Clone, Serialize)]
pub struct OperationResult {
    pub email: String,
    pub account_id: Option<String>,
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub lifecycle_action: Option<LifecycleAction>,
    pub access_action: Option<AccessAction>,
    /// Enriched identity, only used to rewrite the roster.
    #[serde(skip)]
    pub identity: Identity,
}

impl OperationResult {
    pub fn applied(identity: Identity, outcome: OperationOutcome) -> Self {
        Self {
            email: identity.email.clone(),
            account_id: identity.account_id.clone(),
            success: outcome.success(),
            message: outcome.message,
            timestamp: Local::now(),
            lifecycle_action: outcome.lifecycle_action,
            access_action: outcome.access_action,
            identity,
        }
    }

    pub fn not_found(identity: Identity) -> Self {
        Self::failed(identity, USER_NOT_FOUND_MESSAGE)
    }

    pub fn failed(identity: Identity, message: impl Into<String>) -> Self {
        Self {
            email: identity.email.clone(),
            account_id: identity.account_id.clone(),
            success: false,
            message: message.into(),
            timestamp: Local::now(),
            lifecycle_action: None,
            access_action: None,
            identity,
        }
    }

    /// Result of a dry run: the identity resolved and would be processed.
    pub fn dry_run(identity: Identity, operation: Operation) -> Self {
        Self {
            email: identity.email.clone(),
            account_id: identity.account_id.clone(),
            success: true,
            message: format!("Ready for {operation} operation (DRY RUN)"),
            timestamp: Local::now(),
            lifecycle_action: None,
            access_action: None,
            identity,
        }
    }
}
