use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY, DEFAULT_SOURCE_URL,
    DEFAULT_TARGET_URL, LoggingConfig, MigrationConfig, StoreConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TimeBlocker database (read only)
    pub source: StoreConfig,
    /// Unified database
    pub target: StoreConfig,
    pub migration: MigrationConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: StoreConfig::with_url(DEFAULT_SOURCE_URL),
            target: StoreConfig::with_url(DEFAULT_TARGET_URL),
            migration: MigrationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. Check for PB_CONFIG_DIR env var, else use ./.pb/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PB_* (and legacy DATABASE_URL / SECONDARY_DATABASE_URL)
    ///    environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Same as `load()` with an explicit config directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PB_CONFIG_DIR env var > ./.pb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("PB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd =
            std::env::current_dir().map_err(|e| ConfigError::WorkingDirectory { source: e })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors before any store is opened.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.source.validate("source")?;
        self.target.validate("target")?;

        let same_file = matches!(
            (self.source.database_file(), self.target.database_file()),
            (Some(source), Some(target)) if source == target
        );
        if same_file || self.source.url == self.target.url {
            return Err(ConfigError::invalid(
                "target.url",
                format!("must differ from source.url, both are {}", self.source.url),
            ));
        }

        let log_dir = Path::new(&self.logging.dir);
        if log_dir.is_absolute() || self.logging.dir.contains("..") {
            return Err(ConfigError::invalid(
                "logging.dir",
                "must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  source: {} (read only, max {} connections)",
            self.source.url, self.source.max_connections
        );
        info!(
            "  target: {} (max {} connections)",
            self.target.url, self.target.max_connections
        );
        info!(
            "  migration: apply_target_schema={}, backfill_profile={}",
            self.migration.apply_target_schema, self.migration.backfill_profile
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Stores: legacy variables first so PB_* wins
        Self::apply_env_string("SECONDARY_DATABASE_URL", &mut self.source.url);
        Self::apply_env_string("DATABASE_URL", &mut self.target.url);
        Self::apply_env_string("PB_SOURCE_DATABASE_URL", &mut self.source.url);
        Self::apply_env_string("PB_TARGET_DATABASE_URL", &mut self.target.url);
        Self::apply_env_parse(
            "PB_SOURCE_MAX_CONNECTIONS",
            &mut self.source.max_connections,
        );
        Self::apply_env_parse(
            "PB_TARGET_MAX_CONNECTIONS",
            &mut self.target.max_connections,
        );
        Self::apply_env_parse("PB_BUSY_TIMEOUT_SECS", &mut self.source.busy_timeout_secs);
        Self::apply_env_parse("PB_BUSY_TIMEOUT_SECS", &mut self.target.busy_timeout_secs);

        // Migration
        Self::apply_env_bool(
            "PB_APPLY_TARGET_SCHEMA",
            &mut self.migration.apply_target_schema,
        );
        Self::apply_env_bool("PB_BACKFILL_PROFILE", &mut self.migration.backfill_profile);

        // Logging
        Self::apply_env_parse("PB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
