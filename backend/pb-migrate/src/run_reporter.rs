use crate::error::MigrateError;
use crate::hierarchy_migrator::{HierarchyMigrator, SubtreeCounts};
use crate::reconciler::{ProfileBackfill, Reconciler, Reconciliation};
use crate::report::migration_report::MigrationReport;
use crate::report::user_report::UserReport;

use pb_core::User;
use pb_db::PlannerStore;

use log::{error, info, warn};
use tokio::sync::watch;

/// Drives reconciliation and subtree copy for every source user, in id
/// order, and collects the outcome of each.
pub struct RunReporter<'a> {
    source: &'a dyn PlannerStore,
    reconciler: Reconciler<'a>,
    migrator: HierarchyMigrator<'a>,
}

impl<'a> RunReporter<'a> {
    pub fn new(
        source: &'a dyn PlannerStore,
        target: &'a dyn PlannerStore,
        backfill: ProfileBackfill,
    ) -> Self {
        Self {
            source,
            reconciler: Reconciler::new(target, backfill),
            migrator: HierarchyMigrator::new(source, target),
        }
    }

    /// Process all users. Per-user errors, including source rows that cannot
    /// be decoded, become FAILED entries; only a failed enumeration makes the
    /// run FATAL.
    ///
    /// `cancel` is checked before each user. Once it reads `true` the
    /// remaining users are recorded as cancelled without touching either
    /// store.
    pub async fn run(&self, cancel: &watch::Receiver<bool>) -> MigrationReport {
        let mut report = MigrationReport::start();

        let users = match self.source.list_all_users().await {
            Ok(users) => users,
            Err(e) => {
                let err = MigrateError::Enumeration { source: e };
                error!("{err}");
                return report.fatal(&err);
            }
        };

        info!("Found {} users to migrate", users.len());

        let mut cancelled = false;
        for listed in &users {
            if !cancelled && *cancel.borrow() {
                warn!(
                    "Run cancelled, {} users left unprocessed",
                    users.len() - report.users.len()
                );
                cancelled = true;
            }

            let entry = if cancelled {
                UserReport::cancelled(listed)
            } else {
                match listed.user {
                    Ok(ref user) => self.process_user(user).await,
                    Err(ref e) => {
                        warn!("Cannot read source user {}: {e}", listed.id);
                        UserReport::unreadable(listed, e.to_string())
                    }
                }
            };
            report.record(entry);
        }

        let report = report.finish();
        info!(
            "Run {} finished: {} ({} migrated, {} skipped, {} failed)",
            report.run_id,
            report.status,
            report.totals.migrated,
            report.totals.skipped,
            report.totals.failed
        );
        report
    }

    async fn process_user(&self, user: &User) -> UserReport {
        match self.reconciler.reconcile(user).await {
            Err(e) => {
                warn!("Failed to reconcile {}: {e}", user.email);
                UserReport::failed(user, None, e.to_string(), SubtreeCounts::default())
            }
            Ok(Reconciliation::AlreadyPresent {
                target_user_id,
                profile_backfilled,
            }) => UserReport::skipped(user, target_user_id, profile_backfilled),
            Ok(Reconciliation::Created(created)) => {
                match self.migrator.migrate(&created).await {
                    Ok(counts) => {
                        info!(
                            "Migrated {}: {} plans, {} blocks",
                            user.email, counts.plans, counts.blocks
                        );
                        UserReport::migrated(user, created.target_user_id(), counts)
                    }
                    Err(e) => {
                        error!("Subtree copy for {} aborted: {e}", user.email);
                        UserReport::failed(
                            user,
                            Some(created.target_user_id()),
                            e.to_string(),
                            e.counts,
                        )
                    }
                }
            }
        }
    }
}
