use serde::{Deserialize, Serialize};

/// Fields accepted when submitting a project. user_id is overwritten with
/// the authenticated caller identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSubmissionCreate {
    #[serde(default)]
    pub user_id: Option<String>,
    pub project_id: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub feedback: Option<String>,
}
