use crate::{AccountStatus, Operation};

const ACTIVE_KEYWORDS: &[&str] = &["active", "enabled", "enable"];
const SUSPENDED_KEYWORDS: &[&str] = &["suspended", "suspend"];
const DEACTIVATED_KEYWORDS: &[&str] = &["deactivated", "inactive", "disabled", "disable", "deactivate"];

/// Coarse classification of free-form roster status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Active,
    Suspended,
    Deactivated,
    Empty,
    Other,
}

impl StatusClass {
    pub fn classify(text: &str) -> Self {
        let text = text.trim().to_lowercase();

        if text.is_empty() {
            Self::Empty
        } else if ACTIVE_KEYWORDS.contains(&text.as_str()) {
            Self::Active
        } else if SUSPENDED_KEYWORDS.contains(&text.as_str()) {
            Self::Suspended
        } else if DEACTIVATED_KEYWORDS.contains(&text.as_str()) {
            Self::Deactivated
        } else {
            Self::Other
        }
    }

    pub fn account_status(&self) -> Option<AccountStatus> {
        match self {
            Self::Active => Some(AccountStatus::Active),
            Self::Suspended => Some(AccountStatus::Suspended),
            Self::Deactivated => Some(AccountStatus::Deactivated),
            Self::Empty | Self::Other => None,
        }
    }
}

/// Which roster rows an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// No filtering (status ignored, or an operation without a preference).
    All,
    /// Rows that can still be suspended.
    ActiveOrEmpty,
    /// Rows that can be restored.
    InactiveOrEmpty,
}

impl StatusFilter {
    pub fn for_operation(operation: Operation, ignore_status: bool) -> Self {
        if ignore_status {
            return Self::All;
        }
        match operation {
            Operation::Suspend => Self::ActiveOrEmpty,
            Operation::Restore => Self::InactiveOrEmpty,
        }
    }

    pub fn admits(&self, class: StatusClass) -> bool {
        match self {
            Self::All => true,
            Self::ActiveOrEmpty => matches!(class, StatusClass::Active | StatusClass::Empty),
            Self::InactiveOrEmpty => matches!(
                class,
                StatusClass::Suspended | StatusClass::Deactivated | StatusClass::Empty
            ),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::ActiveOrEmpty => "active and without status",
            Self::InactiveOrEmpty => "suspended, deactivated or without status",
        }
    }
}
