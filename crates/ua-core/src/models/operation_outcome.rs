use crate::{AccessAction, LifecycleAction};

/// What the directory service reported for the two halves of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationOutcome {
    pub lifecycle_action: Option<LifecycleAction>,
    pub access_action: Option<AccessAction>,
    pub message: String,
}

impl OperationOutcome {
    /// An operation succeeds when at least one of its halves did.
    pub fn success(&self) -> bool {
        self.lifecycle_action.is_some() || self.access_action.is_some()
    }
}
