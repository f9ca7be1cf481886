use std::sync::Arc;

use axum::http::request::Parts;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use regex::Regex;
use serde_json::{json, Value};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{config, AppConfig};
use crate::handlers;
use crate::store::Store;

/// Shared application state injected into every handler. The store client is
/// created once at startup and lives for the whole process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(handlers::health))
        .merge(handlers::courses::routes())
        .merge(handlers::lessons::routes())
        .merge(handlers::exercises::routes())
        .merge(handlers::tests::routes())
        .merge(handlers::projects::routes())
        .merge(handlers::submissions::routes())
        .merge(handlers::test_submissions::routes())
        .merge(handlers::project_submissions::routes())
        .merge(handlers::user_progress::routes())
        .merge(handlers::question_bank::routes())
        .merge(handlers::dashboard::routes())
        // Global middleware
        .layer(cors_layer(config()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /ping - liveness probe
async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

/// Allow the configured origins plus anything matching the deployment
/// preview pattern, with credentials. Credentialed CORS forbids wildcards,
/// hence the explicit method list and mirrored request headers.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.security.cors_allowed_origins.clone();
    let pattern = Regex::new(&config.security.cors_origin_pattern).ok();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                let Ok(origin) = origin.to_str() else {
                    return false;
                };
                origins.iter().any(|allowed| allowed == origin)
                    || pattern.as_ref().is_some_and(|re| re.is_match(origin))
            },
        ))
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
