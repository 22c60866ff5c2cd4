mod config;
mod error;
mod log_level;
mod logging_config;
mod migration_config;
mod store_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use migration_config::MigrationConfig;
pub use store_config::StoreConfig;

const DEFAULT_CONFIG_DIRECTORY: &str = ".pb";
const DEFAULT_SOURCE_URL: &str = "sqlite://timeblocker.db";
const DEFAULT_TARGET_URL: &str = "sqlite://planboard.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_APPLY_TARGET_SCHEMA: bool = true;
const DEFAULT_BACKFILL_PROFILE: bool = false;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
