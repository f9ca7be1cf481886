use serde::{Deserialize, Serialize};

/// Fields accepted when creating a lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonCreate {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub course_id: String,
    #[serde(default)]
    pub order_index: Option<i64>,
    #[serde(default)]
    pub is_hidden: bool,
}

/// Partial lesson update; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LessonUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn course_id_is_required() {
        assert!(serde_json::from_value::<LessonCreate>(json!({"title": "Intro"})).is_err());
    }

    #[test]
    fn is_hidden_defaults_false() {
        let lesson: LessonCreate =
            serde_json::from_value(json!({"title": "Intro", "course_id": "c1"})).unwrap();
        assert!(!lesson.is_hidden);
        assert!(lesson.order_index.is_none());
    }
}
