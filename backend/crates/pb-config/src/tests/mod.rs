
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

/// Every variable `Config::load` reads, cleared for the test's lifetime
pub(crate) fn clear_env() -> Vec<EnvGuard> {
    [
        "DATABASE_URL",
        "SECONDARY_DATABASE_URL",
        "PB_SOURCE_DATABASE_URL",
        "PB_TARGET_DATABASE_URL",
        "PB_SOURCE_MAX_CONNECTIONS",
        "PB_TARGET_MAX_CONNECTIONS",
        "PB_BUSY_TIMEOUT_SECS",
        "PB_APPLY_TARGET_SCHEMA",
        "PB_BACKFILL_PROFILE",
        "PB_LOG_LEVEL",
        "PB_LOG_COLORED",
        "PB_LOG_FILE",
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}

/// Create a temp config directory, point PB_CONFIG_DIR at it and clear
/// every override
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard, Vec<EnvGuard>) {
    let cleared = clear_env();
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("PB_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard, cleared)
}
