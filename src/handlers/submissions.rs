use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::api::Payload;
use crate::app::AppState;
use crate::auth::{Teacher, UserIdentity};
use crate::error::ApiError;
use crate::resources::{ResourceDef, Visibility};
use crate::schemas::submission::SubmissionCreate;
use crate::schemas::to_row;

const SUBMISSIONS: ResourceDef = ResourceDef {
    table: "submissions",
    label: "Submission",
    key: "submission",
    visibility: Visibility::All,
    order_by: None,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/submissions", post(create))
        .route("/submissions/me", get(mine))
        .route("/submissions/:id", get(get_one))
        .route("/submissions/:id/grade", put(grade))
}

#[derive(Debug, Deserialize)]
struct GradeQuery {
    score: i64,
    #[serde(default)]
    feedback: String,
}

/// GET /submissions/me - the caller's own submissions
async fn mine(
    State(state): State<AppState>,
    user: UserIdentity,
) -> Result<Json<Vec<Value>>, ApiError> {
    let rows = SUBMISSIONS
        .list(
            state.store.as_ref(),
            None,
            &[("user_id", Value::String(user.0))],
        )
        .await?;
    Ok(Json(rows))
}

/// POST /submissions
async fn create(
    State(state): State<AppState>,
    user: UserIdentity,
    Payload(submission): Payload<SubmissionCreate>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut row = to_row(&submission)?;
    // The caller identity always wins over any client-supplied user_id
    row.insert("user_id".to_string(), Value::String(user.0));
    let created = SUBMISSIONS.create(state.store.as_ref(), row).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /submissions/:id - any authenticated caller may fetch any submission
async fn get_one(
    State(state): State<AppState>,
    _user: UserIdentity,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(SUBMISSIONS.get(state.store.as_ref(), &id).await?))
}

/// PUT /submissions/:id/grade?score=..&feedback=..
async fn grade(
    State(state): State<AppState>,
    _teacher: Teacher,
    Path(id): Path<String>,
    Query(grade): Query<GradeQuery>,
) -> Result<Json<Value>, ApiError> {
    let graded = SUBMISSIONS
        .grade(state.store.as_ref(), &id, grade.score, &grade.feedback)
        .await?;
    Ok(Json(graded))
}
