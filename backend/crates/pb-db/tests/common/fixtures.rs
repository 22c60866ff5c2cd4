#![allow(dead_code)]

use pb_core::{Identity, NewDailyPlan, NewTimeBlock, NewUser, PlanId, UserId};

use chrono::{TimeZone, Utc};
use serde_json::json;

/// Creates a NewUser with calendar profile data
pub fn create_test_user(google_id: &str, email: &str) -> NewUser {
    NewUser {
        identity: Identity::new(google_id).unwrap(),
        email: email.to_string(),
        name: format!("User {}", google_id),
        credentials_info: Some(json!({"access_token": "tok", "refresh_token": "ref"})),
        selected_calendars: Some(json!(["primary"])),
        created_at: Utc::now(),
    }
}

/// Creates a NewUser without any TimeBlocker profile data
pub fn create_bare_user(google_id: &str, email: &str) -> NewUser {
    NewUser {
        credentials_info: None,
        selected_calendars: None,
        ..create_test_user(google_id, email)
    }
}

/// Creates a plan for 2024-01-<day>
pub fn create_test_plan(user_id: UserId, day: u32) -> NewDailyPlan {
    NewDailyPlan {
        user_id,
        date: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        created_at: Utc::now(),
    }
}

/// Creates a block on 2024-01-01 between the given hours/minutes
pub fn create_test_block(
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
        created_at: Utc::now(),
    }
}
