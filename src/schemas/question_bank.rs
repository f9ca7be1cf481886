use serde::{Deserialize, Serialize};

/// Fields accepted when adding a question to the shared bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionCreate {
    pub question: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Ordered choices for multiple-choice questions.
    #[serde(default)]
    pub choices: Option<Vec<String>>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}
