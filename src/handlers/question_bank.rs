use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::api::Payload;
use crate::app::AppState;
use crate::auth::Teacher;
use crate::error::ApiError;
use crate::resources::{ResourceDef, Visibility};
use crate::schemas::question_bank::QuestionCreate;
use crate::schemas::to_row;

const QUESTION_BANK: ResourceDef = ResourceDef {
    table: "question_bank",
    label: "Question",
    key: "question",
    visibility: Visibility::All,
    order_by: None,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/question_bank", get(list).post(create))
}

/// GET /question_bank - the whole bank, unfiltered.
/// TODO: add query-string filters (question text, type) once search is
/// actually specified; today every caller gets the full table.
async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(
        QUESTION_BANK.list(state.store.as_ref(), None, &[]).await?,
    ))
}

/// POST /question_bank
async fn create(
    State(state): State<AppState>,
    _teacher: Teacher,
    Payload(question): Payload<QuestionCreate>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = QUESTION_BANK
        .create(state.store.as_ref(), to_row(&question)?)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}
