use crate::{DbError, Result, StoreOptions};

use pb_core::ErrorLocation;

use std::panic::Location;
use std::str::FromStr;

use log::debug;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Open a pool for `options`.
///
/// Any failure here (bad URL, missing file for a read-only store, locked
/// database) is reported as `DbError::Connection`.
pub async fn connect_pool(options: &StoreOptions) -> Result<SqlitePool> {
    if !options.url.starts_with("sqlite:") {
        return Err(DbError::Connection {
            message: format!("Unsupported database URL (expected sqlite:): {}", options.url),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let connect_options = SqliteConnectOptions::from_str(&options.url)
        .map_err(|e| DbError::Connection {
            message: format!("Invalid database URL {}: {}", options.url, e),
            location: ErrorLocation::from(Location::caller()),
        })?
        .create_if_missing(options.create_if_missing)
        .read_only(options.read_only)
        .foreign_keys(true)
        .busy_timeout(options.busy_timeout);

    let pool = SqlitePoolOptions::new()
        .max_connections(options.max_connections)
        .acquire_timeout(options.acquire_timeout)
        .connect_with(connect_options)
        .await
        .map_err(|e| DbError::Connection {
            message: format!("Failed to open {}: {}", options.url, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    debug!(
        "Opened pool for {} (read_only={}, max_connections={})",
        options.url, options.read_only, options.max_connections
    );

    Ok(pool)
}

/// Apply the unified schema.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
