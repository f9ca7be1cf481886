use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marks a lesson completed for the authenticated caller; user_id is
/// overwritten with the caller identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgressCreate {
    #[serde(default)]
    pub user_id: Option<String>,
    pub lesson_id: String,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}
