pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::access_action::AccessAction;
pub use models::account_status::AccountStatus;
pub use models::directory::Directory;
pub use models::identity::{Identity, normalize_email};
pub use models::lifecycle_action::LifecycleAction;
pub use models::operation::Operation;
pub use models::operation_outcome::OperationOutcome;
pub use models::operation_result::OperationResult;
pub use models::status_class::{StatusClass, StatusFilter};
