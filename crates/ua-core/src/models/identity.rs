use crate::AccountStatus;

use serde::{Deserialize, Serialize};

/// A user identity, keyed case-insensitively by email.
///
/// Built either from a roster row (usually partial) or from a directory
/// lookup (canonical). Lookups only ever fill gaps; a field that already
/// carries a value is left alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Identity {
    pub email: String,
    pub account_id: Option<String>,
    pub display_name: Option<String>,
    pub status: Option<AccountStatus>,
    pub account_type: Option<String>,
    pub directory_id: Option<String>,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Case-folded email used for every identity comparison.
    pub fn key(&self) -> String {
        normalize_email(&self.email)
    }

    pub fn matches_email(&self, email: &str) -> bool {
        self.key() == normalize_email(email)
    }

    pub fn has_account_id(&self) -> bool {
        self.account_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Fill missing fields from a fresher instance of the same identity.
    pub fn enrich_from(&mut self, other: &Identity) {
        fill(&mut self.account_id, &other.account_id);
        fill(&mut self.display_name, &other.display_name);
        fill(&mut self.account_type, &other.account_type);
        fill(&mut self.directory_id, &other.directory_id);

        if self.status.is_none() {
            self.status = other.status;
        }
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn fill(target: &mut Option<String>, source: &Option<String>) {
    let target_empty = target.as_deref().is_none_or(str::is_empty);
    if target_empty
        && let Some(value) = source.as_deref().filter(|v| !v.is_empty())
    {
        *target = Some(value.to_string());
    }
}
