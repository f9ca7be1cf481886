use thiserror::Error;

/// Errors surfaced by the store gateway.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Query error: {0}")]
    Query(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl From<super::query::QueryError> for StoreError {
    fn from(err: super::query::QueryError) -> Self {
        StoreError::Query(err.to_string())
    }
}
