use crate::error::SubtreeError;
use crate::reconciler::CreatedUser;

use pb_core::{DailyPlan, NewDailyPlan, NewTimeBlock, PlanId, UserId};
use pb_db::{DbError, PlannerStore};

use std::fmt;

use log::debug;
use serde::Serialize;

/// Rows written to the target for one user's subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubtreeCounts {
    pub plans: usize,
    pub blocks: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtreeStage {
    ListPlans,
    InsertPlan,
    ListBlocks,
    InsertBlock,
}

impl fmt::Display for SubtreeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListPlans => f.write_str("listing plans"),
            Self::InsertPlan => f.write_str("inserting plan"),
            Self::ListBlocks => f.write_str("listing blocks"),
            Self::InsertBlock => f.write_str("inserting block"),
        }
    }
}

/// Copies a created user's plans and blocks from source to target,
/// remapping every id.
pub struct HierarchyMigrator<'a> {
    source: &'a dyn PlannerStore,
    target: &'a dyn PlannerStore,
}

impl<'a> HierarchyMigrator<'a> {
    pub fn new(source: &'a dyn PlannerStore, target: &'a dyn PlannerStore) -> Self {
        Self { source, target }
    }

    /// Copy the whole subtree. The first failing read or write stops the
    /// copy; rows already written stay in the target and are counted in the
    /// error.
    pub async fn migrate(&self, user: &CreatedUser) -> Result<SubtreeCounts, SubtreeError> {
        let mut counts = SubtreeCounts::default();

        let plans = self
            .source
            .list_plans_by_owner(user.source_user_id())
            .await
            .map_err(|e| fail(SubtreeStage::ListPlans, counts, e))?;

        for plan in &plans {
            let copied = self
                .migrate_plan(plan, user.target_user_id(), counts)
                .await?;
            counts.plans += 1;

            self.migrate_blocks(plan.id, copied.id, &mut counts).await?;
        }

        debug!(
            "Copied {} plans and {} blocks for target user {}",
            counts.plans,
            counts.blocks,
            user.target_user_id()
        );

        Ok(counts)
    }

    /// Insert one plan under `owner` and return the target row.
    pub async fn migrate_plan(
        &self,
        plan: &DailyPlan,
        owner: UserId,
        counts: SubtreeCounts,
    ) -> Result<DailyPlan, SubtreeError> {
        self.target
            .insert_plan(&NewDailyPlan::copy_for(plan, owner))
            .await
            .map_err(|e| fail(SubtreeStage::InsertPlan, counts, e))
    }

    /// Copy every block of `source_plan` under `target_plan`, in source id
    /// order. `counts.blocks` advances per inserted block.
    pub async fn migrate_blocks(
        &self,
        source_plan: PlanId,
        target_plan: PlanId,
        counts: &mut SubtreeCounts,
    ) -> Result<(), SubtreeError> {
        let blocks = self
            .source
            .list_blocks_by_plan(source_plan)
            .await
            .map_err(|e| fail(SubtreeStage::ListBlocks, *counts, e))?;

        for block in &blocks {
            self.target
                .insert_block(&NewTimeBlock::copy_for(block, target_plan))
                .await
                .map_err(|e| fail(SubtreeStage::InsertBlock, *counts, e))?;
            counts.blocks += 1;
        }

        Ok(())
    }
}

fn fail(stage: SubtreeStage, counts: SubtreeCounts, source: DbError) -> SubtreeError {
    SubtreeError {
        stage,
        counts,
        source,
    }
}
