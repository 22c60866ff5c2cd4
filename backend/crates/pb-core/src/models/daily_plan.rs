use crate::{PlanId, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub id: PlanId,
    pub user_id: UserId,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDailyPlan {
    pub user_id: UserId,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl NewDailyPlan {
    /// Same plan re-parented under `owner`.
    pub fn copy_for(plan: &DailyPlan, owner: UserId) -> Self {
        Self {
            user_id: owner,
            date: plan.date,
            created_at: Utc::now(),
        }
    }
}
