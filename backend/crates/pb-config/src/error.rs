use error_location::ErrorLocation;
use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting that loaded fine but cannot be used, e.g. `source.url`.
    #[error("Invalid {key}: {message} {location}")]
    Invalid {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot determine current working directory: {source}")]
    WorkingDirectory {
        #[source]
        source: std::io::Error,
    },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = std::result::Result<T, ConfigError>;
