use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::api::Payload;
use crate::app::AppState;
use crate::auth::Teacher;
use crate::error::ApiError;
use crate::resources::{ResourceDef, Visibility};
use crate::schemas::lesson::{LessonCreate, LessonUpdate};
use crate::schemas::to_row;

/// Lessons hang off a course and share its ordering column.
const LESSONS: ResourceDef = ResourceDef {
    table: "lessons",
    label: "Lesson",
    key: "lesson",
    visibility: Visibility::HiddenFlag,
    order_by: Some("order_index"),
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/courses/:course_id/lessons", get(list_for_course))
        .route("/lessons", post(create))
        .route("/lessons/:id", get(get_one).put(update).delete(hide))
}

/// GET /courses/:course_id/lessons - visible lessons of one course, in order
async fn list_for_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let rows = LESSONS
        .list(
            state.store.as_ref(),
            None,
            &[("course_id", Value::String(course_id))],
        )
        .await?;
    Ok(Json(rows))
}

/// GET /lessons/:id
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(LESSONS.get(state.store.as_ref(), &id).await?))
}

/// POST /lessons
async fn create(
    State(state): State<AppState>,
    _teacher: Teacher,
    Payload(lesson): Payload<LessonCreate>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = LESSONS.create(state.store.as_ref(), to_row(&lesson)?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /lessons/:id
async fn update(
    State(state): State<AppState>,
    _teacher: Teacher,
    Path(id): Path<String>,
    Payload(lesson): Payload<LessonUpdate>,
) -> Result<Json<Value>, ApiError> {
    let updated = LESSONS
        .update(state.store.as_ref(), &id, to_row(&lesson)?)
        .await?;
    Ok(Json(updated))
}

/// DELETE /lessons/:id - soft delete
async fn hide(
    State(state): State<AppState>,
    _teacher: Teacher,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let lesson = LESSONS.hide(state.store.as_ref(), &id).await?;
    Ok(Json(LESSONS.success_body(lesson)))
}
