use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::api::Payload;
use crate::app::AppState;
use crate::auth::UserIdentity;
use crate::error::ApiError;
use crate::resources::{ResourceDef, Visibility};
use crate::schemas::test_submission::TestSubmissionCreate;
use crate::schemas::to_row;

/// Test answers are write-once: no update or grade surface here.
const TEST_SUBMISSIONS: ResourceDef = ResourceDef {
    table: "test_submissions",
    label: "Test submission",
    key: "test_submission",
    visibility: Visibility::All,
    order_by: None,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/test_submissions", post(create))
        .route("/test_submissions/me", get(mine))
        .route("/test_submissions/:id", get(get_one))
}

/// POST /test_submissions
async fn create(
    State(state): State<AppState>,
    user: UserIdentity,
    Payload(submission): Payload<TestSubmissionCreate>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut row = to_row(&submission)?;
    row.insert("user_id".to_string(), Value::String(user.0));
    let created = TEST_SUBMISSIONS.create(state.store.as_ref(), row).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /test_submissions/me
async fn mine(
    State(state): State<AppState>,
    user: UserIdentity,
) -> Result<Json<Vec<Value>>, ApiError> {
    let rows = TEST_SUBMISSIONS
        .list(
            state.store.as_ref(),
            None,
            &[("user_id", Value::String(user.0))],
        )
        .await?;
    Ok(Json(rows))
}

/// GET /test_submissions/:id
async fn get_one(
    State(state): State<AppState>,
    _user: UserIdentity,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(TEST_SUBMISSIONS.get(state.store.as_ref(), &id).await?))
}
