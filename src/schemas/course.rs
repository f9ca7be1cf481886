use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::default_difficulty;

fn default_content() -> Value {
    Value::Object(serde_json::Map::new())
}

fn default_estimated_hours() -> i64 {
    1
}

/// Fields accepted when creating a course. Store-assigned fields (id,
/// created_at, is_hidden) never appear here; teacher_id may instead arrive
/// via the `teacher-id` request header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form structured course body (sections, blocks, ...).
    #[serde(default = "default_content")]
    pub content: Value,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_estimated_hours")]
    pub estimated_hours: i64,
    #[serde(default)]
    pub teacher_id: Option<String>,
}

/// Partial course update; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoursePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
}
