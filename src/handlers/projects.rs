use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::api::Payload;
use crate::app::AppState;
use crate::auth::Teacher;
use crate::error::ApiError;
use crate::resources::{ResourceDef, Visibility};
use crate::schemas::project::{ProjectCreate, ProjectPatch};
use crate::schemas::to_row;

/// Projects follow the tests model: published flag, hard delete.
const PROJECTS: ResourceDef = ResourceDef {
    table: "projects",
    label: "Project",
    key: "project",
    visibility: Visibility::PublishedFlag,
    order_by: None,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list).post(create))
        .route("/projects/:id", get(get_one).put(update).delete(remove))
}

/// GET /projects - published projects only
async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(PROJECTS.list(state.store.as_ref(), None, &[]).await?))
}

/// GET /projects/:id
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(PROJECTS.get(state.store.as_ref(), &id).await?))
}

/// POST /projects
async fn create(
    State(state): State<AppState>,
    _teacher: Teacher,
    Payload(project): Payload<ProjectCreate>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = PROJECTS
        .create(state.store.as_ref(), to_row(&project)?)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /projects/:id
async fn update(
    State(state): State<AppState>,
    _teacher: Teacher,
    Path(id): Path<String>,
    Payload(project): Payload<ProjectPatch>,
) -> Result<Json<Value>, ApiError> {
    let updated = PROJECTS
        .update(state.store.as_ref(), &id, to_row(&project)?)
        .await?;
    Ok(Json(updated))
}

/// DELETE /projects/:id - hard delete
async fn remove(
    State(state): State<AppState>,
    _teacher: Teacher,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let project = PROJECTS.remove(state.store.as_ref(), &id).await?;
    Ok(Json(PROJECTS.success_body(project)))
}
