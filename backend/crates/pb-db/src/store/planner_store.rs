use crate::{ListedUser, Result as DbErrorResult};

use pb_core::{
    DailyPlan, Identity, NewDailyPlan, NewTimeBlock, NewUser, PlanId, TimeBlock, User, UserId,
    UserProfile,
};

use async_trait::async_trait;

/// Row-level access to one planner database.
///
/// The same capability is used against the TimeBlocker source and the
/// unified target. Nothing here spans both stores; there is no shared
/// transaction.
#[async_trait]
pub trait PlannerStore: Send + Sync {
    async fn find_user_by_identity(&self, identity: &Identity) -> DbErrorResult<Option<User>>;

    /// Fails with `DbError::Conflict` when the identity is already taken.
    async fn insert_user(&self, user: &NewUser) -> DbErrorResult<User>;

    /// Writes only the profile fields that are NULL on the stored row.
    async fn update_user_profile(&self, id: UserId, profile: &UserProfile) -> DbErrorResult<()>;

    /// Full scan in id order. Fails only when the scan itself fails; rows
    /// that cannot be decoded are returned with an `Err` in `ListedUser::user`.
    async fn list_all_users(&self) -> DbErrorResult<Vec<ListedUser>>;

    async fn list_plans_by_owner(&self, owner: UserId) -> DbErrorResult<Vec<DailyPlan>>;

    async fn insert_plan(&self, plan: &NewDailyPlan) -> DbErrorResult<DailyPlan>;

    async fn list_blocks_by_plan(&self, plan: PlanId) -> DbErrorResult<Vec<TimeBlock>>;

    async fn insert_block(&self, block: &NewTimeBlock) -> DbErrorResult<TimeBlock>;
}
