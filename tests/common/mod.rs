#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use academy_api_rust::store::{Row, SelectQuery, SortDirection, Store, StoreError};
use academy_api_rust::{app, AppState};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Development-preset teacher secret (the suite runs without APP_ENV set).
pub const TEACHER_TOKEN: &str = "secret-teacher-token";

/// Tables whose rows carry the soft-delete flag as a store column default.
const HIDEABLE_TABLES: &[&str] = &["courses", "lessons", "exercises"];

/// In-memory Store backing the integration tests. Mirrors the store behavior
/// the handlers rely on: assigned ids and created_at, the is_hidden column
/// default, equality filters, ordering and offset/limit windows.
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Row>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(HashMap::new()),
        }
    }
}

fn matches(row: &Row, filters: &[(String, Value)]) -> bool {
    filters
        .iter()
        .all(|(column, expected)| row.get(column) == Some(expected))
}

fn row_id(row: &Row) -> Option<&str> {
    row.get("id").and_then(Value::as_str)
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> std::cmp::Ordering {
    match (a.and_then(Value::as_i64), b.and_then(Value::as_i64)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => {
            let x = a.and_then(Value::as_str).unwrap_or("");
            let y = b.and_then(Value::as_str).unwrap_or("");
            x.cmp(y)
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn select(&self, table: &str, query: SelectQuery) -> Result<Vec<Row>, StoreError> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<Row> = tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| matches(row, &query.filters))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some((column, direction)) = &query.order {
            rows.sort_by(|a, b| {
                let ordering = compare(a.get(column), b.get(column));
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        if let Some((offset, limit)) = query.range {
            if offset < 0 || limit < 0 {
                return Err(StoreError::Query(
                    "offset and limit must be non-negative".to_string(),
                ));
            }
            rows = rows
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect();
        }
        Ok(rows)
    }

    async fn select_by_id(&self, table: &str, id: &str) -> Result<Option<Row>, StoreError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .get(table)
            .and_then(|rows| rows.iter().find(|row| row_id(row) == Some(id)))
            .cloned())
    }

    async fn insert(&self, table: &str, mut row: Row) -> Result<Vec<Row>, StoreError> {
        row.entry("id".to_string())
            .or_insert_with(|| Value::String(uuid::Uuid::new_v4().to_string()));
        if !row.contains_key("created_at") {
            row.insert(
                "created_at".to_string(),
                Value::String(chrono::Utc::now().to_rfc3339()),
            );
        }
        if HIDEABLE_TABLES.contains(&table) {
            row.entry("is_hidden".to_string()).or_insert(Value::Bool(false));
        }

        let mut tables = self.tables.lock().unwrap();
        tables.entry(table.to_string()).or_default().push(row.clone());
        Ok(vec![row])
    }

    async fn update(&self, table: &str, id: &str, patch: Row) -> Result<Vec<Row>, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(table.to_string()).or_default();
        for row in rows.iter_mut() {
            if row_id(row) == Some(id) {
                for (column, value) in patch {
                    row.insert(column, value);
                }
                return Ok(vec![row.clone()]);
            }
        }
        Ok(vec![])
    }

    async fn delete(&self, table: &str, id: &str) -> Result<Vec<Row>, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(table.to_string()).or_default();
        match rows.iter().position(|row| row_id(row) == Some(id)) {
            Some(pos) => Ok(vec![rows.remove(pos)]),
            None => Ok(vec![]),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Build the full router over a fresh in-memory store.
pub fn test_app() -> Router {
    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
    app(AppState { store })
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<&Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Drive one request through the router and decode the JSON response.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

/// Create a course through the public API and return its id.
pub async fn create_course(app: &Router, title: &str, order_index: i64) -> String {
    let (status, body) = send(
        app,
        request(
            Method::POST,
            "/courses",
            None,
            Some(&json!({"title": title, "order_index": order_index, "teacher_id": "t1"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "course create failed: {}", body);
    body["id"].as_str().expect("created course has an id").to_string()
}
