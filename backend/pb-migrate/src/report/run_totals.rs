use crate::report::user_outcome::UserOutcome;
use crate::report::user_report::UserReport;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunTotals {
    pub users: usize,
    pub migrated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub plans_copied: usize,
    pub blocks_copied: usize,
}

impl RunTotals {
    pub fn tally(users: &[UserReport]) -> Self {
        users.iter().fold(Self::default(), |mut totals, user| {
            totals.users += 1;
            match user.outcome {
                UserOutcome::Migrated { .. } => totals.migrated += 1,
                UserOutcome::Skipped => totals.skipped += 1,
                UserOutcome::Failed { .. } => totals.failed += 1,
            }
            let (plans, blocks) = user.outcome.copied();
            totals.plans_copied += plans;
            totals.blocks_copied += blocks;
            totals
        })
    }
}
