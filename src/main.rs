use std::sync::Arc;

use academy_api_rust::store::manager::StoreManager;
use academy_api_rust::store::PgStore;
use academy_api_rust::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, TEACHER_TOKEN, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = academy_api_rust::config::config();
    tracing::info!("Starting Academy API in {:?} mode", config.environment);

    // Connect the shared store client up front so a bad DATABASE_URL fails fast
    let pool = StoreManager::pool().await?;
    let state = AppState {
        store: Arc::new(PgStore::new(pool)),
    };

    let app = app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("ACADEMY_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Academy API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    StoreManager::close().await;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
