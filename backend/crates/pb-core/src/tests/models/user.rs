use crate::{Identity, NewUser, User, UserId, UserProfile};

use chrono::Utc;
use googletest::prelude::*;
use serde_json::json;

fn user_with(credentials: Option<serde_json::Value>, calendars: Option<serde_json::Value>) -> User {
    User {
        id: UserId(7),
        identity: Identity::new("g1").unwrap(),
        email: "a@x.com".to_string(),
        name: "Ada".to_string(),
        credentials_info: credentials,
        selected_calendars: calendars,
        created_at: Utc::now(),
    }
}

#[test]
fn given_source_user_when_copied_then_all_profile_fields_carry_over() {
    let source = user_with(Some(json!({"token": "t"})), Some(json!(["primary"])));

    let copy = NewUser::copy_of(&source);

    assert_that!(copy.identity, eq(&source.identity));
    assert_that!(copy.email, eq(&source.email));
    assert_that!(copy.name, eq(&source.name));
    assert_that!(copy.credentials_info, eq(&source.credentials_info));
    assert_that!(copy.selected_calendars, eq(&source.selected_calendars));
}

#[test]
fn given_empty_target_profile_when_diffing_then_all_source_fields_missing() {
    let target = UserProfile::default();
    let source = user_with(Some(json!({"token": "t"})), Some(json!(["primary"]))).profile();

    let missing = target.missing_from(&source);

    assert_that!(missing, eq(&source));
}

#[test]
fn given_target_field_already_set_when_diffing_then_field_is_not_overwritten() {
    let target = user_with(Some(json!({"token": "existing"})), None).profile();
    let source = user_with(Some(json!({"token": "new"})), Some(json!(["work"]))).profile();

    let missing = target.missing_from(&source);

    assert_that!(missing.credentials_info, none());
    assert_that!(missing.selected_calendars, some(eq(&json!(["work"]))));
}

#[test]
fn given_source_without_profile_when_diffing_then_nothing_missing() {
    let target = UserProfile::default();
    let source = UserProfile::default();

    assert!(target.missing_from(&source).is_empty());
}
