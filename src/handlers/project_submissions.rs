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
use crate::schemas::project_submission::ProjectSubmissionCreate;
use crate::schemas::to_row;

const PROJECT_SUBMISSIONS: ResourceDef = ResourceDef {
    table: "project_submissions",
    label: "Project submission",
    key: "project_submission",
    visibility: Visibility::All,
    order_by: None,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/project_submissions", post(create))
        .route("/project_submissions/me", get(mine))
        .route("/project_submissions/:id", get(get_one))
        .route("/project_submissions/:id/grade", put(grade))
}

#[derive(Debug, Deserialize)]
struct GradeQuery {
    score: i64,
    #[serde(default)]
    feedback: String,
}

/// POST /project_submissions
async fn create(
    State(state): State<AppState>,
    user: UserIdentity,
    Payload(submission): Payload<ProjectSubmissionCreate>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut row = to_row(&submission)?;
    row.insert("user_id".to_string(), Value::String(user.0));
    let created = PROJECT_SUBMISSIONS.create(state.store.as_ref(), row).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /project_submissions/me
async fn mine(
    State(state): State<AppState>,
    user: UserIdentity,
) -> Result<Json<Vec<Value>>, ApiError> {
    let rows = PROJECT_SUBMISSIONS
        .list(
            state.store.as_ref(),
            None,
            &[("user_id", Value::String(user.0))],
        )
        .await?;
    Ok(Json(rows))
}

/// GET /project_submissions/:id
async fn get_one(
    State(state): State<AppState>,
    _user: UserIdentity,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(
        PROJECT_SUBMISSIONS.get(state.store.as_ref(), &id).await?,
    ))
}

/// PUT /project_submissions/:id/grade?score=..&feedback=..
async fn grade(
    State(state): State<AppState>,
    _teacher: Teacher,
    Path(id): Path<String>,
    Query(grade): Query<GradeQuery>,
) -> Result<Json<Value>, ApiError> {
    let graded = PROJECT_SUBMISSIONS
        .grade(state.store.as_ref(), &id, grade.score, &grade.feedback)
        .await?;
    Ok(Json(graded))
}
