use crate::{EngineError, EngineResult};

pub const EMAIL_ALIASES: &[&str] = &["email", "Email", "EMAIL", "e-mail"];
pub const ACCOUNT_ID_ALIASES: &[&str] = &["User id", "user_id", "account_id", "Account ID"];
pub const NAME_ALIASES: &[&str] = &["User name", "user_name", "name", "Name"];
pub const STATUS_ALIASES: &[&str] = &["User status", "user_status", "status", "Status"];

/// Column names appended to a roster that lacks them.
pub const DEFAULT_STATUS_COLUMN: &str = "User status";
pub const DEFAULT_ACCOUNT_ID_COLUMN: &str = "User id";
pub const DEFAULT_NAME_COLUMN: &str = "User name";

/// Index of the first header matching one of `aliases`, case-insensitively.
///
/// Aliases are tried in order, so an earlier alias wins over a header that
/// appears first in the file.
pub fn find_column<S: AsRef<str>>(headers: &[S], aliases: &[&str]) -> Option<usize> {
    let folded: Vec<String> = headers
        .iter()
        .map(|h| h.as_ref().trim().to_lowercase())
        .collect();

    aliases.iter().find_map(|alias| {
        let alias = alias.trim().to_lowercase();
        folded.iter().position(|h| *h == alias)
    })
}

/// Positions of the roster columns the engine understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterColumns {
    pub email: usize,
    pub account_id: Option<usize>,
    pub display_name: Option<usize>,
    pub status: Option<usize>,
}

impl RosterColumns {
    /// Resolve columns from a header row; the email column is required.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> EngineResult<Self> {
        let email = find_column(headers, EMAIL_ALIASES)
            .ok_or_else(|| EngineError::configuration("Required 'email' column not found in CSV"))?;

        Ok(Self {
            email,
            account_id: find_column(headers, ACCOUNT_ID_ALIASES),
            display_name: find_column(headers, NAME_ALIASES),
            status: find_column(headers, STATUS_ALIASES),
        })
    }

    /// Header names of the resolved columns, in email/id/name/status order.
    pub fn names<S: AsRef<str>>(&self, headers: &[S]) -> Vec<String> {
        [Some(self.email), self.account_id, self.display_name, self.status]
            .into_iter()
            .flatten()
            .filter_map(|i| headers.get(i))
            .map(|h| h.as_ref().trim().to_string())
            .collect()
    }
}
