use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::auth::UserIdentity;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/overview", get(overview))
        .route("/dashboard/activity", get(activity))
}

/// GET /dashboard/overview - placeholder numbers until real aggregation lands
async fn overview(_user: UserIdentity) -> Json<Value> {
    Json(json!({
        "progress": 75,
        "average_score": 88,
        "deadlines": ["2024-07-01", "2024-07-15"]
    }))
}

/// GET /dashboard/activity - placeholder feed until real aggregation lands
async fn activity(_user: UserIdentity) -> Json<Value> {
    Json(json!({
        "recent_submissions": [
            {"id": "sub1", "date": "2024-06-01"},
            {"id": "sub2", "date": "2024-06-02"}
        ]
    }))
}
