#![allow(dead_code)]

use pb_db::SqliteStore;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

/// In-memory store with the unified schema applied. Every call is a separate database.
pub async fn create_test_store() -> SqliteStore {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    pb_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    SqliteStore::new(pool)
}

/// Number of rows in `table`
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

/// `sqlite://` URL for a file inside `dir`
pub fn file_url(dir: &TempDir, name: &str) -> String {
    format!("sqlite://{}", dir.path().join(name).display())
}
