use crate::{CoreError, Identity};

use googletest::prelude::*;

#[test]
fn given_google_subject_when_creating_identity_then_value_is_kept_verbatim() {
    let identity = Identity::new("108234567890123456789").unwrap();

    assert_that!(identity.as_str(), eq("108234567890123456789"));
    assert_that!(identity.to_string(), eq("108234567890123456789"));
}

#[test]
fn given_blank_value_when_creating_identity_then_invalid_identity() {
    let result = Identity::new("   ");

    assert!(matches!(result, Err(CoreError::InvalidIdentity { .. })));
}

#[test]
fn given_identity_when_serialized_then_plain_string() {
    let identity = Identity::new("g1").unwrap();

    let json = serde_json::to_string(&identity).unwrap();

    assert_that!(json, eq("\"g1\""));
}
