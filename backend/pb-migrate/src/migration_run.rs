use crate::reconciler::ProfileBackfill;
use crate::report::migration_report::MigrationReport;
use crate::run_reporter::RunReporter;
use crate::store_session::StoreSession;

use pb_config::Config;

use log::error;
use tokio::sync::watch;

/// Open both stores, merge every source user into the target and release
/// the stores. Always returns a report; setup failures yield a FATAL one.
pub async fn run_migration(config: &Config, cancel: &watch::Receiver<bool>) -> MigrationReport {
    let session = match StoreSession::open(config).await {
        Ok(session) => session,
        Err(e) => {
            error!("{e}");
            return MigrationReport::start().fatal(&e);
        }
    };

    let report = RunReporter::new(
        &session.source,
        &session.target,
        ProfileBackfill::from(config.migration.backfill_profile),
    )
    .run(cancel)
    .await;

    session.close().await;
    report
}
