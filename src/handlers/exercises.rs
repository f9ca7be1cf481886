use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::api::Payload;
use crate::app::AppState;
use crate::auth::Teacher;
use crate::error::ApiError;
use crate::resources::{Page, PageQuery, ResourceDef, Visibility};
use crate::schemas::exercise::{ExerciseCreate, ExercisePatch};
use crate::schemas::to_row;

const EXERCISES: ResourceDef = ResourceDef {
    table: "exercises",
    label: "Exercise",
    key: "exercise",
    visibility: Visibility::HiddenFlag,
    order_by: None,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/exercises", get(list).post(create))
        .route("/exercises/:id", get(get_one).patch(update).delete(hide))
        .route("/exercises/:id/restore", patch(restore))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    limit: Option<i64>,
    offset: Option<i64>,
    course_id: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// GET /exercises - visible exercises, limit bounded to [1, 100].
///
/// `course_id` and `type` are the only filterable columns; fetch all
/// exercises of one course with `GET /exercises?course_id=...`.
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let page = Page::bounded(&PageQuery {
        limit: query.limit,
        offset: query.offset,
    })?;

    let mut filters: Vec<(&str, Value)> = Vec::new();
    if let Some(course_id) = query.course_id {
        filters.push(("course_id", Value::String(course_id)));
    }
    if let Some(kind) = query.kind {
        filters.push(("type", Value::String(kind)));
    }

    let rows = EXERCISES
        .list(state.store.as_ref(), Some(page), &filters)
        .await?;
    Ok(Json(rows))
}

/// GET /exercises/:id
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(EXERCISES.get(state.store.as_ref(), &id).await?))
}

/// POST /exercises
async fn create(
    State(state): State<AppState>,
    _teacher: Teacher,
    Payload(exercise): Payload<ExerciseCreate>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = EXERCISES
        .create(state.store.as_ref(), to_row(&exercise)?)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /exercises/:id
async fn update(
    State(state): State<AppState>,
    _teacher: Teacher,
    Path(id): Path<String>,
    Payload(patch): Payload<ExercisePatch>,
) -> Result<Json<Value>, ApiError> {
    let updated = EXERCISES
        .update(state.store.as_ref(), &id, to_row(&patch)?)
        .await?;
    Ok(Json(updated))
}

/// DELETE /exercises/:id - soft delete
async fn hide(
    State(state): State<AppState>,
    _teacher: Teacher,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let exercise = EXERCISES.hide(state.store.as_ref(), &id).await?;
    Ok(Json(EXERCISES.success_body(exercise)))
}

/// PATCH /exercises/:id/restore
async fn restore(
    State(state): State<AppState>,
    _teacher: Teacher,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let exercise = EXERCISES.restore(state.store.as_ref(), &id).await?;
    Ok(Json(EXERCISES.success_body(exercise)))
}
