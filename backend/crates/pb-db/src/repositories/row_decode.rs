use crate::{DbError, Result as DbErrorResult};

use pb_core::Identity;

use chrono::{DateTime, Utc};
use serde_json::Value;

#[track_caller]
pub(crate) fn timestamp(ts: i64, field: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
        .ok_or_else(|| DbError::decode(format!("Invalid timestamp in {}: {}", field, ts)))
}

#[track_caller]
pub(crate) fn identity(value: String, field: &str) -> DbErrorResult<Identity> {
    Identity::new(value)
        .map_err(|e| DbError::decode(format!("Invalid identity in {}: {}", field, e)))
}

#[track_caller]
pub(crate) fn json(value: Option<String>, field: &str) -> DbErrorResult<Option<Value>> {
    value
        .map(|text| {
            serde_json::from_str(&text)
                .map_err(|e| DbError::decode(format!("Invalid JSON in {}: {}", field, e)))
        })
        .transpose()
}

#[track_caller]
pub(crate) fn json_text(value: &Option<Value>, field: &str) -> DbErrorResult<Option<String>> {
    value
        .as_ref()
        .map(|v| {
            serde_json::to_string(v)
                .map_err(|e| DbError::decode(format!("Unencodable JSON for {}: {}", field, e)))
        })
        .transpose()
}
