use crate::error::{MigrateError, Result as MigrateErrorResult};

use pb_core::ErrorLocation;

use std::fmt;
use std::fs::File;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Initialize the global logger.
///
/// Logs go to stderr so stdout carries only the report.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - None = stderr, Some = append to this file (parent dirs are created)
/// * `colored` - Colored levels on stderr; ignored for file output
#[track_caller]
pub fn initialize(
    log_level: pb_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> MigrateErrorResult<()> {
    let caller = Location::caller();
    let level_filter = log_level.0;

    let format = if colored && log_file.is_none() {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);
        Dispatch::new().format(move |out, message, record| {
            write_record(out, message, record, colors.color(record.level()))
        })
    } else {
        Dispatch::new()
            .format(|out, message, record| write_record(out, message, record, record.level()))
    };

    let output = match log_file {
        Some(ref path) => format.chain(open_log_file(path).map_err(|message| {
            MigrateError::Logger {
                message,
                location: ErrorLocation::from(caller),
            }
        })?),
        None => format.chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| MigrateError::Logger {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(caller),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}

/// `[<rfc3339> - LEVEL] message [file:line]`
fn write_record(
    out: FormatCallback<'_>,
    message: &fmt::Arguments<'_>,
    record: &Record<'_>,
    level: impl fmt::Display,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}

fn open_log_file(path: &Path) -> Result<File, String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            format!("Failed to create log directory {}: {e}", parent.display())
        })?;
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Failed to open log file {}: {e}", path.display()))
}
