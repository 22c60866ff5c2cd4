#![allow(dead_code)]

use pb_core::{
    DailyPlan, Identity, NewDailyPlan, NewTimeBlock, NewUser, PlanId, TimeBlock, User, UserId,
    UserProfile,
};
use pb_db::{DbError, ListedUser, PlannerStore, Result as DbErrorResult};

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// `PlannerStore` wrapper that injects failures into an inner store.
pub struct FaultyStore<'a> {
    inner: &'a dyn PlannerStore,
    /// 1-based `insert_block` call that fails
    fail_block_insert: Option<usize>,
    /// Number of leading `find_user_by_identity` calls that report `None`
    hidden_lookups: usize,
    fail_user_listing: bool,
    block_inserts: AtomicUsize,
    lookups: AtomicUsize,
    user_inserts: AtomicUsize,
}

impl<'a> FaultyStore<'a> {
    pub fn new(inner: &'a dyn PlannerStore) -> Self {
        Self {
            inner,
            fail_block_insert: None,
            hidden_lookups: 0,
            fail_user_listing: false,
            block_inserts: AtomicUsize::new(0),
            lookups: AtomicUsize::new(0),
            user_inserts: AtomicUsize::new(0),
        }
    }

    pub fn failing_block_insert(mut self, call: usize) -> Self {
        self.fail_block_insert = Some(call);
        self
    }

    pub fn hiding_first_lookups(mut self, count: usize) -> Self {
        self.hidden_lookups = count;
        self
    }

    pub fn failing_user_listing(mut self) -> Self {
        self.fail_user_listing = true;
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn user_inserts(&self) -> usize {
        self.user_inserts.load(Ordering::SeqCst)
    }
}

fn injected() -> DbError {
    DbError::from(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl PlannerStore for FaultyStore<'_> {
    async fn find_user_by_identity(&self, identity: &Identity) -> DbErrorResult<Option<User>> {
        let call = self.lookups.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.hidden_lookups {
            return Ok(None);
        }
        self.inner.find_user_by_identity(identity).await
    }

    async fn insert_user(&self, user: &NewUser) -> DbErrorResult<User> {
        self.user_inserts.fetch_add(1, Ordering::SeqCst);
        self.inner.insert_user(user).await
    }

    async fn update_user_profile(&self, id: UserId, profile: &UserProfile) -> DbErrorResult<()> {
        self.inner.update_user_profile(id, profile).await
    }

    async fn list_all_users(&self) -> DbErrorResult<Vec<ListedUser>> {
        if self.fail_user_listing {
            return Err(injected());
        }
        self.inner.list_all_users().await
    }

    async fn list_plans_by_owner(&self, owner: UserId) -> DbErrorResult<Vec<DailyPlan>> {
        self.inner.list_plans_by_owner(owner).await
    }

    async fn insert_plan(&self, plan: &NewDailyPlan) -> DbErrorResult<DailyPlan> {
        self.inner.insert_plan(plan).await
    }

    async fn list_blocks_by_plan(&self, plan: PlanId) -> DbErrorResult<Vec<TimeBlock>> {
        self.inner.list_blocks_by_plan(plan).await
    }

    async fn insert_block(&self, block: &NewTimeBlock) -> DbErrorResult<TimeBlock> {
        let call = self.block_inserts.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_block_insert == Some(call) {
            return Err(injected());
        }
        self.inner.insert_block(block).await
    }
}
