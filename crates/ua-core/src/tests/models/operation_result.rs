use crate::{
    AccessAction, Identity, LifecycleAction, Operation, OperationOutcome, OperationResult,
};

#[test]
fn test_applied_success_when_only_access_succeeds() {
    let outcome = OperationOutcome {
        lifecycle_action: None,
        access_action: Some(AccessAction::Suspended),
        message: "Lifecycle: not found | Access suspended".to_string(),
    };

    let result = OperationResult::applied(Identity::new("a@x.com"), outcome);

    assert!(result.success);
    assert_eq!(result.lifecycle_action, None);
    assert_eq!(result.access_action, Some(AccessAction::Suspended));
}

#[test]
fn test_applied_failure_when_both_halves_fail() {
    let outcome = OperationOutcome {
        lifecycle_action: None,
        access_action: None,
        message: "Lifecycle: not found | Access: not found".to_string(),
    };

    let result = OperationResult::applied(Identity::new("a@x.com"), outcome);

    assert!(!result.success);
}

#[test]
fn test_applied_success_when_both_halves_succeed() {
    let outcome = OperationOutcome {
        lifecycle_action: Some(LifecycleAction::Enabled),
        access_action: Some(AccessAction::Restored),
        message: "Lifecycle enabled | Access restored".to_string(),
    };

    assert!(outcome.success());
}

#[test]
fn test_not_found_result() {
    let result = OperationResult::not_found(Identity::new("ghost@x.com"));

    assert!(!result.success);
    assert_eq!(result.message, "User not found");
    assert!(result.account_id.is_none());
}

#[test]
fn test_dry_run_result() {
    let identity = Identity {
        account_id: Some("acc-1".to_string()),
        ..Identity::new("a@x.com")
    };

    let result = OperationResult::dry_run(identity, Operation::Suspend);

    assert!(result.success);
    assert_eq!(result.message, "Ready for suspend operation (DRY RUN)");
    assert_eq!(result.account_id.as_deref(), Some("acc-1"));
}
