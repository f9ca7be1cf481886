use serde::{Deserialize, Serialize};

/// Fields accepted when submitting an exercise solution.
///
/// A client-supplied user_id is accepted but always overwritten with the
/// authenticated caller identity before the row reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionCreate {
    #[serde(default)]
    pub user_id: Option<String>,
    pub exercise_id: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_id_is_optional_in_the_body() {
        let submission: SubmissionCreate =
            serde_json::from_value(json!({"exercise_id": "e1", "code": "Sub x()"})).unwrap();
        assert!(submission.user_id.is_none());
        assert_eq!(submission.code.as_deref(), Some("Sub x()"));
    }
}
