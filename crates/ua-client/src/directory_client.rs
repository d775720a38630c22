use crate::ClientResult;

use ua_core::{Directory, Identity, Operation, OperationOutcome};

use async_trait::async_trait;

/// Capabilities the batch engine needs from the remote directory service.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Check that the credential is accepted and has admin rights.
    async fn verify_credentials(&self) -> ClientResult<()>;

    /// All directories of the organization, fetched fresh.
    async fn list_directories(&self) -> ClientResult<Vec<Directory>>;

    /// Every user of every directory, following continuation cursors.
    async fn list_all_users(&self) -> ClientResult<Vec<Identity>>;

    /// First user whose email matches case-insensitively.
    ///
    /// Service failures on a page skip the rest of that directory, so
    /// `Ok(None)` can also mean "not found in the pages that could be read".
    /// Network errors are returned.
    async fn find_by_email(&self, email: &str) -> ClientResult<Option<Identity>>;

    /// Run the lifecycle and access halves of `operation` for one account.
    ///
    /// Only a rate limit on either half is returned as an error; every other
    /// failure is folded into the outcome message.
    async fn apply_operation(
        &self,
        account_id: &str,
        operation: Operation,
        message: &str,
    ) -> ClientResult<OperationOutcome>;
}
