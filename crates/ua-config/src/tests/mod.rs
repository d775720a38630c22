
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and point UA_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("UA_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Set valid credentials so only the setting under test can fail validation
pub(crate) fn with_credentials() -> (EnvGuard, EnvGuard) {
    (
        EnvGuard::set("UA_ORG_ID", "org-123"),
        EnvGuard::set("UA_API_KEY", "secret-key-abcd"),
    )
}
