use crate::{
    DailyPlanRepository, ListedUser, PlannerStore, Result as DbErrorResult, StoreOptions,
    TimeBlockRepository, UserRepository, connect_pool,
};

use pb_core::{
    DailyPlan, Identity, NewDailyPlan, NewTimeBlock, NewUser, PlanId, TimeBlock, User, UserId,
    UserProfile,
};

use async_trait::async_trait;
use sqlx::SqlitePool;

/// `PlannerStore` over one SQLite pool.
pub struct SqliteStore {
    pool: SqlitePool,
    users: UserRepository,
    plans: DailyPlanRepository,
    blocks: TimeBlockRepository,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            plans: DailyPlanRepository::new(pool.clone()),
            blocks: TimeBlockRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn connect(options: &StoreOptions) -> DbErrorResult<Self> {
        Ok(Self::new(connect_pool(options).await?))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection. Consumes the store so it cannot be
    /// closed twice.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PlannerStore for SqliteStore {
    async fn find_user_by_identity(&self, identity: &Identity) -> DbErrorResult<Option<User>> {
        self.users.find_by_identity(identity).await
    }

    async fn insert_user(&self, user: &NewUser) -> DbErrorResult<User> {
        self.users.create(user).await
    }

    async fn update_user_profile(&self, id: UserId, profile: &UserProfile) -> DbErrorResult<()> {
        self.users.fill_missing_profile(id, profile).await
    }

    async fn list_all_users(&self) -> DbErrorResult<Vec<ListedUser>> {
        self.users.find_all().await
    }

    async fn list_plans_by_owner(&self, owner: UserId) -> DbErrorResult<Vec<DailyPlan>> {
        self.plans.find_by_user(owner).await
    }

    async fn insert_plan(&self, plan: &NewDailyPlan) -> DbErrorResult<DailyPlan> {
        self.plans.create(plan).await
    }

    async fn list_blocks_by_plan(&self, plan: PlanId) -> DbErrorResult<Vec<TimeBlock>> {
        self.blocks.find_by_plan(plan).await
    }

    async fn insert_block(&self, block: &NewTimeBlock) -> DbErrorResult<TimeBlock> {
        self.blocks.create(block).await
    }
}
