use crate::{AccountStatus, Operation, StatusClass, StatusFilter};

#[test]
fn test_classify_keywords() {
    assert_eq!(StatusClass::classify("Active"), StatusClass::Active);
    assert_eq!(StatusClass::classify("enabled"), StatusClass::Active);
    assert_eq!(StatusClass::classify(" SUSPEND "), StatusClass::Suspended);
    assert_eq!(StatusClass::classify("inactive"), StatusClass::Deactivated);
    assert_eq!(StatusClass::classify("disabled"), StatusClass::Deactivated);
    assert_eq!(StatusClass::classify(""), StatusClass::Empty);
    assert_eq!(StatusClass::classify("   "), StatusClass::Empty);
    assert_eq!(StatusClass::classify("pending"), StatusClass::Other);
}

#[test]
fn test_class_to_account_status() {
    assert_eq!(
        StatusClass::Deactivated.account_status(),
        Some(AccountStatus::Deactivated)
    );
    assert_eq!(StatusClass::Empty.account_status(), None);
}

#[test]
fn test_suspend_filter_admits_active_and_empty() {
    let filter = StatusFilter::for_operation(Operation::Suspend, false);

    assert!(filter.admits(StatusClass::Active));
    assert!(filter.admits(StatusClass::Empty));
    assert!(!filter.admits(StatusClass::Suspended));
    assert!(!filter.admits(StatusClass::Deactivated));
    assert!(!filter.admits(StatusClass::Other));
}

#[test]
fn test_restore_filter_admits_inactive_and_empty() {
    let filter = StatusFilter::for_operation(Operation::Restore, false);

    assert!(filter.admits(StatusClass::Suspended));
    assert!(filter.admits(StatusClass::Deactivated));
    assert!(filter.admits(StatusClass::Empty));
    assert!(!filter.admits(StatusClass::Active));
}

#[test]
fn test_ignore_status_admits_everything() {
    let filter = StatusFilter::for_operation(Operation::Suspend, true);

    assert_eq!(filter, StatusFilter::All);
    assert!(filter.admits(StatusClass::Suspended));
    assert!(filter.admits(StatusClass::Other));
}
