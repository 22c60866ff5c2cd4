#![allow(dead_code)]

use pb_core::{Identity, NewDailyPlan, NewTimeBlock, NewUser, PlanId, User, UserId};
use pb_db::PlannerStore;

use chrono::{TimeZone, Utc};
use serde_json::json;

/// NewUser with calendar profile data
pub fn new_user(google_id: &str, email: &str) -> NewUser {
    NewUser {
        identity: Identity::new(google_id).unwrap(),
        email: email.to_string(),
        name: format!("User {}", google_id),
        credentials_info: Some(json!({"access_token": "tok", "refresh_token": "ref"})),
        selected_calendars: Some(json!(["primary", "work"])),
        created_at: Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap(),
    }
}

/// NewUser without calendar profile data
pub fn new_bare_user(google_id: &str, email: &str) -> NewUser {
    NewUser {
        credentials_info: None,
        selected_calendars: None,
        ..new_user(google_id, email)
    }
}

/// Plan for 2024-01-<day>
pub fn new_plan(user_id: UserId, day: u32) -> NewDailyPlan {
    NewDailyPlan {
        user_id,
        date: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        created_at: Utc.with_ymd_and_hms(2023, 12, 31, 20, 0, 0).unwrap(),
    }
}

/// Block on 2024-01-01 between the given hours/minutes
pub fn new_block(
    plan_id: PlanId,
    title: &str,
    (start_h, start_m): (u32, u32),
    (end_h, end_m): (u32, u32),
) -> NewTimeBlock {
    NewTimeBlock {
        daily_plan_id: plan_id,
        title: title.to_string(),
        start_time: Utc.with_ymd_and_hms(2024, 1, 1, start_h, start_m, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2024, 1, 1, end_h, end_m, 0).unwrap(),
        category: Some("work".to_string()),
        priority: Some("high".to_string()),
        created_at: Utc.with_ymd_and_hms(2023, 12, 31, 20, 5, 0).unwrap(),
    }
}

/// Source user g1/a@x.com with plan 2024-01-01 holding
/// standup 09:00-09:15 and focus 09:15-11:00.
pub async fn seed_scenario(source: &dyn PlannerStore) -> User {
    let user = source.insert_user(&new_user("g1", "a@x.com")).await.unwrap();
    let plan = source.insert_plan(&new_plan(user.id, 1)).await.unwrap();
    source
        .insert_block(&new_block(plan.id, "standup", (9, 0), (9, 15)))
        .await
        .unwrap();
    source
        .insert_block(&new_block(plan.id, "focus", (9, 15), (11, 0)))
        .await
        .unwrap();
    user
}

/// User with one plan per entry of `blocks_per_plan` (days 1, 2, ...),
/// each holding that many hour-long blocks.
pub async fn seed_user_with_subtree(
    store: &dyn PlannerStore,
    google_id: &str,
    email: &str,
    blocks_per_plan: &[usize],
) -> User {
    let user = store.insert_user(&new_user(google_id, email)).await.unwrap();
    for (index, block_count) in blocks_per_plan.iter().enumerate() {
        let plan = store
            .insert_plan(&new_plan(user.id, index as u32 + 1))
            .await
            .unwrap();
        for hour in 0..*block_count as u32 {
            store
                .insert_block(&new_block(
                    plan.id,
                    &format!("block {}-{}", index + 1, hour),
                    (8 + hour, 0),
                    (9 + hour, 0),
                ))
                .await
                .unwrap();
        }
    }
    user
}
