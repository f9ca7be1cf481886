use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tokio::sync::OnceCell;
use tracing::info;

use super::error::StoreError;
use crate::config::config;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Process-wide store client lifecycle: one lazily-created pool shared by
/// every request, closed explicitly on shutdown.
pub struct StoreManager;

impl StoreManager {
    /// Get the shared pool, creating it from DATABASE_URL on first use.
    pub async fn pool() -> Result<PgPool, StoreError> {
        let pool = POOL
            .get_or_try_init(|| async {
                let url = std::env::var("DATABASE_URL")
                    .map_err(|_| StoreError::ConfigMissing("DATABASE_URL"))?;
                let database = &config().database;
                let pool = PgPoolOptions::new()
                    .max_connections(database.max_connections)
                    .acquire_timeout(Duration::from_secs(database.acquire_timeout_secs))
                    .connect(&url)
                    .await?;
                info!("Created store connection pool");
                Ok::<_, StoreError>(pool)
            })
            .await?;
        Ok(pool.clone())
    }

    /// Close the shared pool on shutdown.
    pub async fn close() {
        if let Some(pool) = POOL.get() {
            pool.close().await;
            info!("Closed store connection pool");
        }
    }
}
