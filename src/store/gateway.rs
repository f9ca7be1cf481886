use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{PgPool, Row as _};

use super::error::StoreError;
use super::query::{self, SelectQuery};

/// A row as stored and returned by the remote store.
pub type Row = Map<String, Value>;

/// Query-builder contract over the remote relational store: one uniform
/// operation family across every resource table. Mutations are single-row
/// and non-transactional; any failure surfaces immediately to the caller.
#[async_trait]
pub trait Store: Send + Sync {
    async fn select(&self, table: &str, query: SelectQuery) -> Result<Vec<Row>, StoreError>;

    async fn select_by_id(&self, table: &str, id: &str) -> Result<Option<Row>, StoreError>;

    /// Insert a single row; returns the created row(s) as reported back by
    /// the store. An empty result is a creation failure, not a success.
    async fn insert(&self, table: &str, row: Row) -> Result<Vec<Row>, StoreError>;

    /// Partial update by id; returns the affected rows (empty when the id
    /// matched nothing).
    async fn update(&self, table: &str, id: &str, patch: Row) -> Result<Vec<Row>, StoreError>;

    /// Hard delete by id; returns the removed rows (empty when the id
    /// matched nothing).
    async fn delete(&self, table: &str, id: &str) -> Result<Vec<Row>, StoreError>;

    /// Connectivity probe.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Postgres-backed store.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn bind_value<'q>(
    q: sqlx::query::Query<'q, sqlx::Postgres, PgArguments>,
    value: &'q Value,
) -> sqlx::query::Query<'q, sqlx::Postgres, PgArguments> {
    match value {
        Value::Bool(b) => q.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                q.bind(i)
            } else if let Some(f) = n.as_f64() {
                q.bind(f)
            } else {
                q.bind(n.to_string())
            }
        }
        Value::String(s) => q.bind(s.as_str()),
        // Arrays and objects travel as JSONB
        other => q.bind(other.clone()),
    }
}

fn json_rows(rows: Vec<PgRow>) -> Result<Vec<Row>, StoreError> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let value: Value = row.try_get("row")?;
        match value {
            Value::Object(map) => out.push(map),
            other => return Err(StoreError::Query(format!("unexpected row shape: {}", other))),
        }
    }
    Ok(out)
}

#[async_trait]
impl Store for PgStore {
    async fn select(&self, table: &str, query: SelectQuery) -> Result<Vec<Row>, StoreError> {
        let sql = query::select_sql(table, &query)?;
        let mut q = sqlx::query(&sql.query);
        for param in sql.params.iter() {
            q = bind_value(q, param);
        }
        let rows = q.fetch_all(&self.pool).await?;
        json_rows(rows)
    }

    async fn select_by_id(&self, table: &str, id: &str) -> Result<Option<Row>, StoreError> {
        let sql = query::select_by_id_sql(table)?;
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(match row {
            Some(row) => json_rows(vec![row])?.pop(),
            None => None,
        })
    }

    async fn insert(&self, table: &str, row: Row) -> Result<Vec<Row>, StoreError> {
        let sql = query::insert_sql(table, &row)?;
        let rows = sqlx::query(&sql)
            .bind(Value::Object(row))
            .fetch_all(&self.pool)
            .await?;
        json_rows(rows)
    }

    async fn update(&self, table: &str, id: &str, patch: Row) -> Result<Vec<Row>, StoreError> {
        let sql = query::update_sql(table, &patch)?;
        let rows = sqlx::query(&sql)
            .bind(id)
            .bind(Value::Object(patch))
            .fetch_all(&self.pool)
            .await?;
        json_rows(rows)
    }

    async fn delete(&self, table: &str, id: &str) -> Result<Vec<Row>, StoreError> {
        let sql = query::delete_sql(table)?;
        let rows = sqlx::query(&sql).bind(id).fetch_all(&self.pool).await?;
        json_rows(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
