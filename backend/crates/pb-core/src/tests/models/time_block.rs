use crate::{BlockId, DailyPlan, NewDailyPlan, NewTimeBlock, PlanId, TimeBlock, UserId};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

#[test]
fn given_block_when_copied_for_new_plan_then_only_parent_changes() {
    // Given
    let block = TimeBlock {
        id: BlockId(11),
        daily_plan_id: PlanId(3),
        title: "standup".to_string(),
        start_time: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap(),
        category: Some("meeting".to_string()),
        priority: None,
        created_at: Utc::now(),
    };

    // When
    let copy = NewTimeBlock::copy_for(&block, PlanId(42));

    // Then
    assert_that!(copy.daily_plan_id, eq(PlanId(42)));
    assert_that!(copy.title, eq("standup"));
    assert_that!(copy.start_time, eq(block.start_time));
    assert_that!(copy.end_time, eq(block.end_time));
    assert_that!(copy.category, eq(&block.category));
    assert_that!(copy.priority, none());
}

#[test]
fn given_inverted_block_when_copied_then_times_are_not_normalized() {
    let block = TimeBlock {
        id: BlockId(1),
        daily_plan_id: PlanId(1),
        title: "backwards".to_string(),
        start_time: Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
        category: None,
        priority: None,
        created_at: Utc::now(),
    };

    let copy = NewTimeBlock::copy_for(&block, PlanId(2));

    assert_that!(copy.start_time, eq(block.start_time));
    assert_that!(copy.end_time, eq(block.end_time));
}

#[test]
fn given_plan_when_copied_for_new_owner_then_date_is_kept() {
    let plan = DailyPlan {
        id: PlanId(5),
        user_id: UserId(1),
        date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        created_at: Utc::now(),
    };

    let copy = NewDailyPlan::copy_for(&plan, UserId(99));

    assert_that!(copy.user_id, eq(UserId(99)));
    assert_that!(copy.date, eq(plan.date));
}
