pub mod access_action;
pub mod account_status;
pub mod directory;
pub mod identity;
pub mod lifecycle_action;
pub mod operation;
pub mod operation_outcome;
pub mod operation_result;
pub mod status_class;
