//! Response shapes of the directory service.

use ua_core::{AccountStatus, Directory, Identity};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct DirectoryListResponse {
    #[serde(default)]
    pub data: Vec<DirectoryDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DirectoryDto {
    pub directory_id: String,
    #[serde(default)]
    pub name: String,
}

impl From<DirectoryDto> for Directory {
    fn from(dto: DirectoryDto) -> Self {
        Directory::new(dto.directory_id, dto.name)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserPageResponse {
    #[serde(default)]
    pub data: Vec<UserDto>,
    #[serde(default)]
    pub links: Option<PageLinks>,
}

impl UserPageResponse {
    /// Continuation cursor, if the server announced another page.
    pub fn next_cursor(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|links| links.next.as_deref())
            .filter(|cursor| !cursor.is_empty())
    }
}

/// Page of the organization user-management listing. Only the entry count
/// is used.
#[derive(Debug, Deserialize)]
pub(crate) struct OrgUserPageResponse {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageLinks {
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserDto {
    #[serde(default)]
    pub email: String,
    pub account_id: Option<String>,
    pub name: Option<String>,
    pub status: Option<AccountStatus>,
    pub account_type: Option<String>,
}

impl UserDto {
    pub fn into_identity(self, directory_id: &str) -> Identity {
        Identity {
            email: self.email,
            account_id: self.account_id,
            display_name: self.name,
            status: self.status,
            account_type: self.account_type,
            directory_id: Some(directory_id.to_string()),
        }
    }
}
