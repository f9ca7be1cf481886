use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::config;
use crate::error::ApiError;
use crate::store::{Row, SelectQuery, SortDirection, Store};

/// How a resource is filtered out of default list results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visibility {
    /// Rows carry an `is_hidden` flag; "deleting" flips it on and the row
    /// stays in the store (restorable).
    HiddenFlag,
    /// Rows carry an `is_published` flag; unpublished rows are invisible to
    /// listing and deletion removes the row permanently.
    PublishedFlag,
    /// Every row is listed.
    All,
}

/// Table-level description of one resource kind.
///
/// Handler modules declare one of these per resource and share the operation
/// set below; this is the single place the list/get/create/update/hide/
/// restore/grade semantics live.
pub struct ResourceDef {
    pub table: &'static str,
    /// Capitalized label used in error details ("Course not found").
    pub label: &'static str,
    /// JSON key for the row in `{"success": true, ...}` mutation responses.
    pub key: &'static str,
    pub visibility: Visibility,
    /// Default list ordering, always ascending.
    pub order_by: Option<&'static str>,
}

/// Pagination window taken from the query string.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Page {
    /// Defaults applied, values passed through unchecked.
    pub fn unchecked(query: &PageQuery) -> Self {
        Self {
            limit: query.limit.unwrap_or(config().api.default_page_size),
            offset: query.offset.unwrap_or(0),
        }
    }

    /// Defaults applied, limit bounded to [1, max_page_size], offset to >= 0.
    pub fn bounded(query: &PageQuery) -> Result<Self, ApiError> {
        let page = Self::unchecked(query);
        let max = config().api.max_page_size;
        if page.limit < 1 || page.limit > max {
            return Err(ApiError::validation(format!(
                "limit must be between 1 and {}",
                max
            )));
        }
        if page.offset < 0 {
            return Err(ApiError::validation("offset must be non-negative"));
        }
        Ok(page)
    }
}

impl ResourceDef {
    fn base_query(&self) -> SelectQuery {
        let query = SelectQuery::new();
        match self.visibility {
            Visibility::HiddenFlag => query.eq("is_hidden", false),
            Visibility::PublishedFlag => query.eq("is_published", true),
            Visibility::All => query,
        }
    }

    /// List visible rows, optionally filtered on declared columns and
    /// windowed. Hidden/unpublished rows never appear here.
    pub async fn list(
        &self,
        store: &dyn Store,
        page: Option<Page>,
        filters: &[(&str, Value)],
    ) -> Result<Vec<Value>, ApiError> {
        let mut query = self.base_query();
        for (column, value) in filters {
            query = query.eq(*column, value.clone());
        }
        if let Some(column) = self.order_by {
            query = query.order_by(column, SortDirection::Asc);
        }
        if let Some(page) = page {
            query = query.range(page.offset, page.limit);
        }
        let rows = store.select(self.table, query).await?;
        Ok(rows.into_iter().map(Value::Object).collect())
    }

    /// Fetch one row by id. Unlike `list`, hidden rows are returned: the
    /// visibility filter applies to listing only.
    pub async fn get(&self, store: &dyn Store, id: &str) -> Result<Value, ApiError> {
        let row = store
            .select_by_id(self.table, id)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("{} not found", self.label)))?;
        Ok(Value::Object(row))
    }

    /// Insert a row; the store assigns id and created_at.
    pub async fn create(&self, store: &dyn Store, row: Row) -> Result<Value, ApiError> {
        let mut created = store.insert(self.table, row).await?;
        if created.is_empty() {
            return Err(ApiError::internal(format!(
                "Failed to create {}",
                self.label.to_lowercase()
            )));
        }
        Ok(Value::Object(created.remove(0)))
    }

    /// Partial update by id; fields absent from the patch are untouched.
    pub async fn update(&self, store: &dyn Store, id: &str, patch: Row) -> Result<Value, ApiError> {
        let mut updated = store.update(self.table, id, patch).await?;
        if updated.is_empty() {
            return Err(ApiError::not_found(format!(
                "{} not found or not updated",
                self.label
            )));
        }
        Ok(Value::Object(updated.remove(0)))
    }

    async fn set_hidden(
        &self,
        store: &dyn Store,
        id: &str,
        hidden: bool,
        verb: &str,
    ) -> Result<Value, ApiError> {
        let mut patch = Row::new();
        patch.insert("is_hidden".to_string(), Value::Bool(hidden));
        let mut updated = store.update(self.table, id, patch).await?;
        if updated.is_empty() {
            return Err(ApiError::not_found(format!(
                "{} not found or not {}",
                self.label, verb
            )));
        }
        Ok(Value::Object(updated.remove(0)))
    }

    /// Soft delete: flip `is_hidden` on. The row stays in the store and
    /// direct lookups still return it.
    pub async fn hide(&self, store: &dyn Store, id: &str) -> Result<Value, ApiError> {
        self.set_hidden(store, id, true, "deleted").await
    }

    /// Undo a soft delete. Idempotent: restoring a visible row is a no-op
    /// that still succeeds.
    pub async fn restore(&self, store: &dyn Store, id: &str) -> Result<Value, ApiError> {
        self.set_hidden(store, id, false, "restored").await
    }

    /// Hard delete: the row is removed permanently.
    pub async fn remove(&self, store: &dyn Store, id: &str) -> Result<Value, ApiError> {
        let mut deleted = store.delete(self.table, id).await?;
        if deleted.is_empty() {
            return Err(ApiError::not_found(format!(
                "{} not found or not deleted",
                self.label
            )));
        }
        Ok(Value::Object(deleted.remove(0)))
    }

    /// Record a score and feedback on a submission-like row.
    pub async fn grade(
        &self,
        store: &dyn Store,
        id: &str,
        score: i64,
        feedback: &str,
    ) -> Result<Value, ApiError> {
        let mut patch = Row::new();
        patch.insert("score".to_string(), json!(score));
        patch.insert("feedback".to_string(), json!(feedback));
        let mut updated = store.update(self.table, id, patch).await?;
        if updated.is_empty() {
            return Err(ApiError::not_found(format!(
                "{} not found or not graded",
                self.label
            )));
        }
        Ok(Value::Object(updated.remove(0)))
    }

    /// Wrap a row in the `{"success": true, "<key>": row}` mutation response.
    pub fn success_body(&self, row: Value) -> Value {
        let mut body = serde_json::Map::new();
        body.insert("success".to_string(), Value::Bool(true));
        body.insert(self.key.to_string(), row);
        Value::Object(body)
    }
}
