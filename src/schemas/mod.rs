//! Per-entity data-shape contracts for incoming payloads.
//!
//! Create types mirror the full insert shape with its defaults; patch types
//! are all-optional and skip unset fields, so partial updates never clobber
//! columns the caller did not send.

pub mod course;
pub mod exercise;
pub mod lesson;
pub mod project;
pub mod project_submission;
pub mod question_bank;
pub mod submission;
pub mod test;
pub mod test_submission;
pub mod user_progress;

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::store::Row;

/// Convert a payload struct into a store row.
pub fn to_row<T: Serialize>(payload: &T) -> Result<Row, ApiError> {
    match serde_json::to_value(payload) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ApiError::internal("Failed to serialize payload")),
    }
}

pub(crate) fn default_difficulty() -> String {
    "beginner".to_string()
}
