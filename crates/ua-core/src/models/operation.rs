use crate::{AccessAction, CoreError, CoreResult, LifecycleAction};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A state-changing operation applied to every identity of a roster.
///
/// Each operation fans out into two independent remote calls: a lifecycle
/// toggle and an access toggle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Suspend,
    Restore,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Suspend => "suspend",
            Self::Restore => "restore",
        }
    }

    /// Last path segment of the lifecycle endpoint.
    pub fn lifecycle_endpoint(&self) -> &'static str {
        match self {
            Self::Suspend => "disable",
            Self::Restore => "enable",
        }
    }

    /// Last path segment of the access endpoint.
    pub fn access_endpoint(&self) -> &'static str {
        match self {
            Self::Suspend => "suspend-access",
            Self::Restore => "restore-access",
        }
    }

    pub fn lifecycle_action(&self) -> LifecycleAction {
        match self {
            Self::Suspend => LifecycleAction::Disabled,
            Self::Restore => LifecycleAction::Enabled,
        }
    }

    pub fn access_action(&self) -> AccessAction {
        match self {
            Self::Suspend => AccessAction::Suspended,
            Self::Restore => AccessAction::Restored,
        }
    }

    /// Status text written back into the roster after a successful run.
    pub fn roster_status(&self) -> &'static str {
        match self {
            Self::Suspend => "suspended",
            Self::Restore => "active",
        }
    }

    /// Past participle used in summaries ("3 users suspended").
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Suspend => "suspended",
            Self::Restore => "restored",
        }
    }

    /// Remote-side message attached to lifecycle calls.
    pub fn audit_message(&self) -> String {
        format!("Bulk {} operation", self.as_str())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "suspend" => Ok(Self::Suspend),
            "restore" => Ok(Self::Restore),
            _ => Err(CoreError::InvalidOperation {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
