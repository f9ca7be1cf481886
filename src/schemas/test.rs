use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields accepted when creating a test (a timed assessment on a course).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub course_id: String,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_published: bool,
}

/// Partial test update; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dates_are_optional() {
        let test: TestCreate =
            serde_json::from_value(json!({"title": "Midterm", "course_id": "c1"})).unwrap();
        assert!(test.start_date.is_none());
        assert!(!test.is_published);
    }

    #[test]
    fn rfc3339_dates_parse() {
        let test: TestCreate = serde_json::from_value(json!({
            "title": "Midterm",
            "course_id": "c1",
            "start_date": "2026-01-15T09:00:00Z"
        }))
        .unwrap();
        assert!(test.start_date.is_some());
    }
}
