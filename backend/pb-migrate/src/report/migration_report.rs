use crate::error::{MigrateError, Result as MigrateErrorResult};
use crate::report::run_status::RunStatus;
use crate::report::run_totals::RunTotals;
use crate::report::user_outcome::UserOutcome;
use crate::report::user_report::UserReport;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Structured record of one run.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    pub run_id: Uuid,
    pub status: RunStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_seconds: f64,
    pub users: Vec<UserReport>,
    pub totals: RunTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fatal_error: Option<String>,
}

impl MigrationReport {
    /// Empty report stamped with a fresh run id and start time.
    pub fn start() -> Self {
        let now = Utc::now();
        Self {
            run_id: Uuid::new_v4(),
            status: RunStatus::Success,
            started_at: now,
            completed_at: now,
            duration_seconds: 0.0,
            users: Vec::new(),
            totals: RunTotals::default(),
            fatal_error: None,
        }
    }

    pub fn record(&mut self, user: UserReport) {
        self.users.push(user);
    }

    /// Close the report: totals, status and timing.
    pub fn finish(mut self) -> Self {
        self.totals = RunTotals::tally(&self.users);
        self.status = if self.totals.failed > 0 {
            RunStatus::Partial
        } else {
            RunStatus::Success
        };
        self.stamp_completion();
        self
    }

    /// Close the report as FATAL. Per-user entries are dropped.
    pub fn fatal(mut self, error: &MigrateError) -> Self {
        self.users.clear();
        self.totals = RunTotals::default();
        self.status = RunStatus::Fatal;
        self.fatal_error = Some(error.to_string());
        self.stamp_completion();
        self
    }

    pub fn to_json(&self) -> MigrateErrorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn stamp_completion(&mut self) {
        self.completed_at = Utc::now();
        self.duration_seconds =
            (self.completed_at - self.started_at).num_milliseconds() as f64 / 1000.0;
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Migration run {}: {}", self.run_id, self.status)?;

        if let Some(ref error) = self.fatal_error {
            return writeln!(f, "  fatal: {error}");
        }

        for user in &self.users {
            write!(f, "  {}: {}", user.identity, user.outcome.label())?;
            match &user.outcome {
                UserOutcome::Migrated { plans, blocks } => {
                    write!(f, " ({plans} plans, {blocks} blocks)")?
                }
                UserOutcome::Skipped if user.profile_backfilled => {
                    write!(f, " (profile backfilled)")?
                }
                UserOutcome::Skipped => {}
                UserOutcome::Failed {
                    reason,
                    plans,
                    blocks,
                } => write!(f, " ({reason}; {plans} plans, {blocks} blocks written)")?,
            }
            writeln!(f)?;
        }

        writeln!(
            f,
            "  users: {} (migrated {}, skipped {}, failed {})",
            self.totals.users, self.totals.migrated, self.totals.skipped, self.totals.failed
        )?;
        writeln!(
            f,
            "  copied: {} plans, {} blocks in {:.2}s",
            self.totals.plans_copied, self.totals.blocks_copied, self.duration_seconds
        )
    }
}
