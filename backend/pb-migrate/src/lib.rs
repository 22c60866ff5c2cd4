pub mod cli;
pub mod error;
pub mod hierarchy_migrator;
pub mod logger;
pub mod migration_run;
pub mod reconciler;
pub mod report;
pub mod run_reporter;
pub mod store_session;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{
    MigrateError, ReconcileError, Result as MigrateErrorResult, StoreRole, SubtreeError,
};
pub use hierarchy_migrator::{HierarchyMigrator, SubtreeCounts, SubtreeStage};
pub use migration_run::run_migration;
pub use reconciler::{CreatedUser, ProfileBackfill, Reconciler, Reconciliation};
pub use report::{
    migration_report::MigrationReport,
    run_status::RunStatus,
    run_totals::RunTotals,
    user_outcome::UserOutcome,
    user_report::{CANCELLED_REASON, UserReport},
};
pub use run_reporter::RunReporter;
pub use store_session::StoreSession;
