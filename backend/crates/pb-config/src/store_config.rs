use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_BUSY_TIMEOUT_SECS,
    DEFAULT_MAX_CONNECTIONS,
};

use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use sqlx::sqlite::SqliteConnectOptions;

/// Connection settings for one store (`[source]` or `[target]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// sqlx SQLite URL
    pub url: String,
    pub max_connections: u32,
    pub busy_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
}

impl StoreConfig {
    pub(crate) fn with_url(url: &str) -> Self {
        Self {
            url: String::from(url),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_secs: DEFAULT_BUSY_TIMEOUT_SECS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }

    /// `section` is the table name (`source` or `target`) used in error keys.
    pub fn validate(&self, section: &str) -> ConfigErrorResult<()> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::invalid(format!("{section}.url"), "must be set"));
        }

        if !self.url.starts_with("sqlite:") {
            return Err(ConfigError::invalid(
                format!("{section}.url"),
                format!("expected a sqlite: URL, got {}", self.url),
            ));
        }

        if self.max_connections < 1 {
            return Err(ConfigError::invalid(
                format!("{section}.max_connections"),
                format!("must be >= 1, got {}", self.max_connections),
            ));
        }

        for (key, secs) in [
            ("busy_timeout_secs", self.busy_timeout_secs),
            ("acquire_timeout_secs", self.acquire_timeout_secs),
        ] {
            if secs < 1 {
                return Err(ConfigError::invalid(
                    format!("{section}.{key}"),
                    "must be >= 1",
                ));
            }
        }

        Ok(())
    }

    /// Database file the URL points at, so `sqlite://a.db`, `sqlite:a.db` and
    /// `sqlite://./a.db` compare equal. `None` when sqlx cannot parse the URL.
    pub fn database_file(&self) -> Option<PathBuf> {
        let options = SqliteConnectOptions::from_str(&self.url).ok()?;
        Some(normalize(options.get_filename()))
    }
}

fn normalize(file: &Path) -> PathBuf {
    if let Ok(path) = std::fs::canonicalize(file) {
        return path;
    }

    let absolute = match std::env::current_dir() {
        Ok(cwd) if file.is_relative() => cwd.join(file),
        _ => file.to_path_buf(),
    };
    absolute
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::with_url("")
    }
}
