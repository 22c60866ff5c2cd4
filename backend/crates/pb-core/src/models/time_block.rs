use crate::{BlockId, PlanId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A titled slot inside a daily plan.
///
/// `start_time <= end_time` is expected from the application but is not
/// enforced here or by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: BlockId,
    pub daily_plan_id: PlanId,

    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    pub category: Option<String>,
    pub priority: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTimeBlock {
    pub daily_plan_id: PlanId,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewTimeBlock {
    /// Verbatim copy of `block` re-parented under `plan`.
    pub fn copy_for(block: &TimeBlock, plan: PlanId) -> Self {
        Self {
            daily_plan_id: plan,
            title: block.title.clone(),
            start_time: block.start_time,
            end_time: block.end_time,
            category: block.category.clone(),
            priority: block.priority.clone(),
            created_at: Utc::now(),
        }
    }
}
