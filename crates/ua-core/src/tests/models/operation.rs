use crate::{AccessAction, LifecycleAction, Operation};

use std::str::FromStr;

#[test]
fn test_operation_from_str() {
    assert_eq!(Operation::from_str("suspend").unwrap(), Operation::Suspend);
    assert_eq!(Operation::from_str("RESTORE").unwrap(), Operation::Restore);
    assert_eq!(Operation::from_str(" Suspend ").unwrap(), Operation::Suspend);
    assert!(Operation::from_str("delete").is_err());
}

#[test]
fn test_operation_endpoints() {
    assert_eq!(Operation::Suspend.lifecycle_endpoint(), "disable");
    assert_eq!(Operation::Suspend.access_endpoint(), "suspend-access");
    assert_eq!(Operation::Restore.lifecycle_endpoint(), "enable");
    assert_eq!(Operation::Restore.access_endpoint(), "restore-access");
}

#[test]
fn test_operation_actions() {
    assert_eq!(
        Operation::Suspend.lifecycle_action(),
        LifecycleAction::Disabled
    );
    assert_eq!(Operation::Suspend.access_action(), AccessAction::Suspended);
    assert_eq!(Operation::Restore.lifecycle_action(), LifecycleAction::Enabled);
    assert_eq!(Operation::Restore.access_action(), AccessAction::Restored);
}

#[test]
fn test_operation_roster_status() {
    assert_eq!(Operation::Suspend.roster_status(), "suspended");
    assert_eq!(Operation::Restore.roster_status(), "active");
}

#[test]
fn test_operation_audit_message() {
    assert_eq!(Operation::Restore.audit_message(), "Bulk restore operation");
}
