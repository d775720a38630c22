use crate::HttpDirectoryClient;

use ua_config::{ApiConfig, RetryConfig};
use ua_core::Operation;

fn api(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        org_id: "org-1".to_string(),
        api_key: "key".to_string(),
        timeout_secs: 5,
    }
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = HttpDirectoryClient::new(&api("https://api.example.com/"), &RetryConfig::default())
        .unwrap();
    assert_eq!(client.base_url, "https://api.example.com");
}

#[test]
fn test_org_id_stored() {
    let client =
        HttpDirectoryClient::new(&api("https://api.example.com"), &RetryConfig::default()).unwrap();
    assert_eq!(client.org_id, "org-1");
}

#[test]
fn test_users_url_carries_limit_and_cursor() {
    let client =
        HttpDirectoryClient::new(&api("https://api.example.com"), &RetryConfig::default()).unwrap();

    let first = client.users_url("dir-1", None).unwrap();
    let next = client.users_url("dir-1", Some("abc=")).unwrap();

    assert_eq!(
        first.as_str(),
        "https://api.example.com/admin/v2/orgs/org-1/directories/dir-1/users?limit=100"
    );
    assert_eq!(
        next.as_str(),
        "https://api.example.com/admin/v2/orgs/org-1/directories/dir-1/users?limit=100&cursor=abc%3D"
    );
}

#[test]
fn test_operation_urls() {
    let client =
        HttpDirectoryClient::new(&api("https://api.example.com"), &RetryConfig::default()).unwrap();

    assert_eq!(
        client.lifecycle_url("acc-1", Operation::Suspend),
        "https://api.example.com/users/acc-1/manage/lifecycle/disable"
    );
    assert_eq!(
        client.access_url("acc-1", Operation::Restore),
        "https://api.example.com/admin/v1/orgs/org-1/directory/users/acc-1/restore-access"
    );
}

#[test]
fn test_api_key_with_newline_rejected() {
    let mut config = api("https://api.example.com");
    config.api_key = "bad\nkey".to_string();

    let result = HttpDirectoryClient::new(&config, &RetryConfig::default());

    assert!(result.is_err());
}
