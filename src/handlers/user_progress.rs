use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::api::Payload;
use crate::app::AppState;
use crate::auth::UserIdentity;
use crate::error::ApiError;
use crate::resources::{ResourceDef, Visibility};
use crate::schemas::to_row;
use crate::schemas::user_progress::UserProgressCreate;

const USER_PROGRESS: ResourceDef = ResourceDef {
    table: "user_progress",
    label: "Progress record",
    key: "progress",
    visibility: Visibility::All,
    order_by: None,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/user_progress", post(create))
        .route("/user_progress/me", get(mine))
}

/// GET /user_progress/me - the caller's completed lessons
async fn mine(
    State(state): State<AppState>,
    user: UserIdentity,
) -> Result<Json<Vec<Value>>, ApiError> {
    let rows = USER_PROGRESS
        .list(
            state.store.as_ref(),
            None,
            &[("user_id", Value::String(user.0))],
        )
        .await?;
    Ok(Json(rows))
}

/// POST /user_progress - mark a lesson completed for the caller
async fn create(
    State(state): State<AppState>,
    user: UserIdentity,
    Payload(progress): Payload<UserProgressCreate>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut row = to_row(&progress)?;
    row.insert("user_id".to_string(), Value::String(user.0));
    let created = USER_PROGRESS.create(state.store.as_ref(), row).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
