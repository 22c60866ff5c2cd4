use serde::Serialize;

/// Per-user result, tagged as `outcome` in the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserOutcome {
    Migrated {
        plans: usize,
        blocks: usize,
    },
    Skipped,
    /// `plans` and `blocks` count rows written before the failure.
    Failed {
        reason: String,
        plans: usize,
        blocks: usize,
    },
}

impl UserOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Migrated { .. } => "MIGRATED",
            Self::Skipped => "SKIPPED",
            Self::Failed { .. } => "FAILED",
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Plans and blocks this user added to the target.
    pub fn copied(&self) -> (usize, usize) {
        match self {
            Self::Migrated { plans, blocks } | Self::Failed { plans, blocks, .. } => {
                (*plans, *blocks)
            }
            Self::Skipped => (0, 0),
        }
    }
}
