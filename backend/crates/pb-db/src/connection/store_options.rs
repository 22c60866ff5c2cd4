use std::time::Duration;

/// How to open one SQLite store.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// sqlx SQLite URL, e.g. `sqlite://timeblocker.db`
    pub url: String,
    pub max_connections: u32,
    pub busy_timeout: Duration,
    pub acquire_timeout: Duration,
    /// Open with `SQLITE_OPEN_READONLY`; every write fails at the driver.
    pub read_only: bool,
    pub create_if_missing: bool,
}

impl StoreOptions {
    /// Options for a store that is only ever read.
    pub fn read_only(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            read_only: true,
            create_if_missing: false,
            ..Self::default()
        }
    }

    /// Options for a store that receives writes; created when absent.
    pub fn read_write(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            read_only: false,
            create_if_missing: true,
            ..Self::default()
        }
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            url: String::from("sqlite::memory:"),
            max_connections: 5,
            busy_timeout: Duration::from_secs(5),
            acquire_timeout: Duration::from_secs(30),
            read_only: false,
            create_if_missing: true,
        }
    }
}
