use crate::{DEFAULT_APPLY_TARGET_SCHEMA, DEFAULT_BACKFILL_PROFILE};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Apply the unified schema to the target before merging
    pub apply_target_schema: bool,
    /// Fill NULL calendar fields on users that already exist in the target.
    /// Off by default: existing users are left untouched.
    pub backfill_profile: bool,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            apply_target_schema: DEFAULT_APPLY_TARGET_SCHEMA,
            backfill_profile: DEFAULT_BACKFILL_PROFILE,
        }
    }
}
