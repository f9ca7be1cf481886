use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::default_difficulty;

fn default_max_score() -> i64 {
    100
}

/// Fields accepted when creating an exercise. `kind` distinguishes code,
/// multiple-choice and free-text exercises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseCreate {
    pub title: String,
    pub description: String,
    /// Starter payload handed to the learner.
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub expected_output: Option<String>,
    /// Ordered structured cases the submission is checked against.
    #[serde(default)]
    pub test_cases: Vec<Value>,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_max_score")]
    pub max_score: i64,
    #[serde(default)]
    pub time_limit: Option<i64>,
    pub course_id: String,
    #[serde(default)]
    pub lesson_id: Option<String>,
    /// "code" | "qcm" | "text"
    #[serde(rename = "type")]
    pub kind: String,
}

/// Partial exercise update; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExercisePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_cases: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
