use crate::hierarchy_migrator::SubtreeCounts;
use crate::report::user_outcome::UserOutcome;

use pb_core::{User, UserId};
use pb_db::ListedUser;

use serde::Serialize;

pub const CANCELLED_REASON: &str = "run cancelled";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReport {
    pub source_user_id: UserId,
    /// Source identity as stored, even when it could not be decoded.
    pub identity: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_user_id: Option<UserId>,
    #[serde(flatten)]
    pub outcome: UserOutcome,
    pub profile_backfilled: bool,
}

impl UserReport {
    fn new(
        source_user_id: UserId,
        identity: &str,
        email: &str,
        target_user_id: Option<UserId>,
        outcome: UserOutcome,
    ) -> Self {
        Self {
            source_user_id,
            identity: identity.to_string(),
            email: email.to_string(),
            target_user_id,
            outcome,
            profile_backfilled: false,
        }
    }

    fn for_user(user: &User, target_user_id: Option<UserId>, outcome: UserOutcome) -> Self {
        Self::new(
            user.id,
            user.identity.as_str(),
            &user.email,
            target_user_id,
            outcome,
        )
    }

    pub fn migrated(user: &User, target_user_id: UserId, counts: SubtreeCounts) -> Self {
        Self::for_user(
            user,
            Some(target_user_id),
            UserOutcome::Migrated {
                plans: counts.plans,
                blocks: counts.blocks,
            },
        )
    }

    pub fn skipped(user: &User, target_user_id: UserId, profile_backfilled: bool) -> Self {
        Self {
            profile_backfilled,
            ..Self::for_user(user, Some(target_user_id), UserOutcome::Skipped)
        }
    }

    pub fn failed(
        user: &User,
        target_user_id: Option<UserId>,
        reason: impl Into<String>,
        counts: SubtreeCounts,
    ) -> Self {
        Self::for_user(
            user,
            target_user_id,
            UserOutcome::Failed {
                reason: reason.into(),
                plans: counts.plans,
                blocks: counts.blocks,
            },
        )
    }

    /// Source row that was listed but could not be decoded into a user.
    pub fn unreadable(listed: &ListedUser, reason: impl Into<String>) -> Self {
        Self::new(
            listed.id,
            &listed.identity,
            &listed.email,
            None,
            UserOutcome::Failed {
                reason: reason.into(),
                plans: 0,
                blocks: 0,
            },
        )
    }

    pub fn cancelled(listed: &ListedUser) -> Self {
        Self::unreadable(listed, CANCELLED_REASON)
    }
}
