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
use crate::schemas::test::{TestCreate, TestPatch};
use crate::schemas::to_row;

/// Tests are published rather than hidden; deleting one removes the row
/// for good.
const TESTS: ResourceDef = ResourceDef {
    table: "tests",
    label: "Test",
    key: "test",
    visibility: Visibility::PublishedFlag,
    order_by: None,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tests", get(list).post(create))
        .route("/tests/:id", get(get_one).put(update).delete(remove))
}

/// GET /tests - published tests only
async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(TESTS.list(state.store.as_ref(), None, &[]).await?))
}

/// GET /tests/:id
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(TESTS.get(state.store.as_ref(), &id).await?))
}

/// POST /tests
async fn create(
    State(state): State<AppState>,
    _teacher: Teacher,
    Payload(test): Payload<TestCreate>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = TESTS.create(state.store.as_ref(), to_row(&test)?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /tests/:id
async fn update(
    State(state): State<AppState>,
    _teacher: Teacher,
    Path(id): Path<String>,
    Payload(test): Payload<TestPatch>,
) -> Result<Json<Value>, ApiError> {
    let updated = TESTS
        .update(state.store.as_ref(), &id, to_row(&test)?)
        .await?;
    Ok(Json(updated))
}

/// DELETE /tests/:id - hard delete
async fn remove(
    State(state): State<AppState>,
    _teacher: Teacher,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let test = TESTS.remove(state.store.as_ref(), &id).await?;
    Ok(Json(TESTS.success_body(test)))
}
