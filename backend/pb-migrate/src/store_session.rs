use crate::error::{MigrateError, Result as MigrateErrorResult, StoreRole};

use pb_config::{Config, StoreConfig};
use pb_db::{SqliteStore, StoreOptions, run_migrations};

use std::time::Duration;

use log::{debug, info};

/// The open source and target stores of one run.
///
/// `open` acquires both or neither; `close` consumes the session so the
/// pools are released exactly once.
pub struct StoreSession {
    pub source: SqliteStore,
    pub target: SqliteStore,
}

impl StoreSession {
    pub async fn open(config: &Config) -> MigrateErrorResult<Self> {
        let source = SqliteStore::connect(&source_options(&config.source))
            .await
            .map_err(|e| MigrateError::Connection {
                role: StoreRole::Source,
                source: e,
            })?;
        debug!("Opened source store {}", config.source.url);

        let target = match SqliteStore::connect(&target_options(&config.target)).await {
            Ok(target) => target,
            Err(e) => {
                source.close().await;
                return Err(MigrateError::Connection {
                    role: StoreRole::Target,
                    source: e,
                });
            }
        };
        debug!("Opened target store {}", config.target.url);

        if config.migration.apply_target_schema
            && let Err(e) = run_migrations(target.pool()).await
        {
            source.close().await;
            target.close().await;
            return Err(MigrateError::Schema { source: e });
        }

        info!("Store session open");
        Ok(Self { source, target })
    }

    pub async fn close(self) {
        self.source.close().await;
        self.target.close().await;
        info!("Store session closed");
    }
}

fn source_options(config: &StoreConfig) -> StoreOptions {
    StoreOptions {
        max_connections: config.max_connections,
        busy_timeout: Duration::from_secs(config.busy_timeout_secs),
        acquire_timeout: Duration::from_secs(config.acquire_timeout_secs),
        ..StoreOptions::read_only(config.url.as_str())
    }
}

fn target_options(config: &StoreConfig) -> StoreOptions {
    StoreOptions {
        max_connections: config.max_connections,
        busy_timeout: Duration::from_secs(config.busy_timeout_secs),
        acquire_timeout: Duration::from_secs(config.acquire_timeout_secs),
        ..StoreOptions::read_write(config.url.as_str())
    }
}
