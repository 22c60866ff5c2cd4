use crate::hierarchy_migrator::{SubtreeCounts, SubtreeStage};

use pb_core::{ErrorLocation, UserId};
use pb_db::DbError;

use std::fmt;

use thiserror::Error;

/// Which side of the merge a store belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreRole {
    Source,
    Target,
}

impl fmt::Display for StoreRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Errors that end the whole run.
#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("Config error: {0}")]
    Config(#[from] pb_config::ConfigError),

    #[error("Cannot open {role} store: {source}")]
    Connection {
        role: StoreRole,
        #[source]
        source: DbError,
    },

    #[error("Cannot apply unified schema to target: {source}")]
    Schema {
        #[source]
        source: DbError,
    },

    #[error("Cannot enumerate source users: {source}")]
    Enumeration {
        #[source]
        source: DbError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MigrateError>;

/// Reconciliation failure for a single user. Recorded, never fatal.
#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("Lookup of identity {identity} failed: {source}")]
    Lookup {
        identity: String,
        #[source]
        source: DbError,
    },

    #[error("Insert of identity {identity} failed: {source}")]
    Insert {
        identity: String,
        #[source]
        source: DbError,
    },

    #[error("Identity {identity} conflicted on insert but is absent on re-read {location}")]
    Conflict {
        identity: String,
        location: ErrorLocation,
    },

    #[error("Profile backfill for user {user_id} failed: {source}")]
    Backfill {
        user_id: UserId,
        #[source]
        source: DbError,
    },
}

/// Subtree copy failure for a single user, with what was written before it.
#[derive(Error, Debug)]
#[error(
    "{stage} failed after copying {} plans and {} blocks: {source}",
    .counts.plans,
    .counts.blocks
)]
pub struct SubtreeError {
    pub stage: SubtreeStage,
    pub counts: SubtreeCounts,
    #[source]
    pub source: DbError,
}
