use serde::{Deserialize, Serialize};

/// A remote-side partition of the organization's users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Directory {
    pub directory_id: String,
    pub name: String,
}

impl Directory {
    pub fn new(directory_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            directory_id: directory_id.into(),
            name: name.into(),
        }
    }

    /// First eight characters of the id, for compact display.
    pub fn short_id(&self) -> &str {
        match self.directory_id.char_indices().nth(8) {
            Some((idx, _)) => &self.directory_id[..idx],
            None => &self.directory_id,
        }
    }
}
