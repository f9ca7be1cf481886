use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde_json::Value;

use crate::api::Payload;
use crate::app::AppState;
use crate::auth::Teacher;
use crate::error::ApiError;
use crate::resources::{Page, PageQuery, ResourceDef, Visibility};
use crate::schemas::course::{CourseCreate, CoursePatch};
use crate::schemas::to_row;

/// Course catalog: soft-deletable, listed in order_index order.
const COURSES: ResourceDef = ResourceDef {
    table: "courses",
    label: "Course",
    key: "course",
    visibility: Visibility::HiddenFlag,
    order_by: Some("order_index"),
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list).post(create))
        .route("/courses/:id", get(get_one).patch(update).delete(hide))
        .route("/courses/:id/restore", patch(restore))
}

/// GET /courses - visible courses, order_index ascending.
/// Limit and offset are passed through unchecked here.
async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let rows = COURSES
        .list(state.store.as_ref(), Some(Page::unchecked(&page)), &[])
        .await?;
    Ok(Json(rows))
}

/// GET /courses/:id - direct lookup, returns hidden courses too
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(COURSES.get(state.store.as_ref(), &id).await?))
}

/// POST /courses - no bearer gate; teacher_id comes from the header or body
async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(course): Payload<CourseCreate>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let teacher_id = headers
        .get("teacher-id")
        .or_else(|| headers.get("teacher_id"))
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or_else(|| course.teacher_id.clone())
        .ok_or_else(|| ApiError::bad_request("teacher_id required (header or body)"))?;

    let mut row = to_row(&course)?;
    row.insert("teacher_id".to_string(), Value::String(teacher_id));
    let created = COURSES.create(state.store.as_ref(), row).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /courses/:id
async fn update(
    State(state): State<AppState>,
    _teacher: Teacher,
    Path(id): Path<String>,
    Payload(patch): Payload<CoursePatch>,
) -> Result<Json<Value>, ApiError> {
    let updated = COURSES
        .update(state.store.as_ref(), &id, to_row(&patch)?)
        .await?;
    Ok(Json(updated))
}

/// DELETE /courses/:id - soft delete, the row stays restorable
async fn hide(
    State(state): State<AppState>,
    _teacher: Teacher,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let course = COURSES.hide(state.store.as_ref(), &id).await?;
    Ok(Json(COURSES.success_body(course)))
}

/// PATCH /courses/:id/restore
async fn restore(
    State(state): State<AppState>,
    _teacher: Teacher,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let course = COURSES.restore(state.store.as_ref(), &id).await?;
    Ok(Json(COURSES.success_body(course)))
}
