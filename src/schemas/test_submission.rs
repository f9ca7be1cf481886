use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields accepted when submitting test answers. user_id is overwritten with
/// the authenticated caller identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSubmissionCreate {
    #[serde(default)]
    pub user_id: Option<String>,
    pub test_id: String,
    /// Answers keyed by question id.
    #[serde(default)]
    pub answers: Option<Value>,
    #[serde(default)]
    pub score: Option<i64>,
}
