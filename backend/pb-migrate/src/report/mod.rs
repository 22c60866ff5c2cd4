pub mod migration_report;
pub mod run_status;
pub mod run_totals;
pub mod user_outcome;
pub mod user_report;
