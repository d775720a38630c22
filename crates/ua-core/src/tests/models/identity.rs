use crate::{AccountStatus, Identity};

#[test]
fn test_identity_key_is_case_folded() {
    let identity = Identity::new("  Alice@Example.COM ");

    assert_eq!(identity.key(), "alice@example.com");
    assert!(identity.matches_email("ALICE@example.com"));
}

#[test]
fn test_enrich_fills_missing_fields() {
    let mut identity = Identity::new("alice@example.com");
    let remote = Identity {
        email: "alice@example.com".to_string(),
        account_id: Some("acc-1".to_string()),
        display_name: Some("Alice".to_string()),
        status: Some(AccountStatus::Active),
        account_type: Some("atlassian".to_string()),
        directory_id: Some("dir-1".to_string()),
    };

    identity.enrich_from(&remote);

    assert_eq!(identity.account_id.as_deref(), Some("acc-1"));
    assert_eq!(identity.display_name.as_deref(), Some("Alice"));
    assert_eq!(identity.status, Some(AccountStatus::Active));
    assert_eq!(identity.directory_id.as_deref(), Some("dir-1"));
}

#[test]
fn test_enrich_never_overwrites_existing_values() {
    let mut identity = Identity {
        display_name: Some("Alice From Roster".to_string()),
        ..Identity::new("alice@example.com")
    };
    let remote = Identity {
        account_id: Some("acc-1".to_string()),
        display_name: Some("Alice Remote".to_string()),
        ..Identity::new("alice@example.com")
    };

    identity.enrich_from(&remote);

    assert_eq!(identity.display_name.as_deref(), Some("Alice From Roster"));
    assert_eq!(identity.account_id.as_deref(), Some("acc-1"));
}

#[test]
fn test_enrich_replaces_empty_string() {
    let mut identity = Identity {
        account_id: Some(String::new()),
        ..Identity::new("bob@example.com")
    };
    assert!(!identity.has_account_id());

    identity.enrich_from(&Identity {
        account_id: Some("acc-2".to_string()),
        ..Identity::new("bob@example.com")
    });

    assert!(identity.has_account_id());
    assert_eq!(identity.account_id.as_deref(), Some("acc-2"));
}

#[test]
fn test_account_status_deserializes_unknown_values() {
    let status: AccountStatus = serde_json::from_str("\"pending\"").unwrap();
    assert_eq!(status, AccountStatus::Unknown);

    let status: AccountStatus = serde_json::from_str("\"suspended\"").unwrap();
    assert_eq!(status, AccountStatus::Suspended);
}
