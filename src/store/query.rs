use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Invalid table name: {0}")]
    InvalidTable(String),

    #[error("Invalid column name: {0}")]
    InvalidColumn(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Empty row payload")]
    EmptyRow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A single-table read: equality filters, optional ordering and an
/// offset/limit window. This is the entire query surface the API needs.
#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    pub filters: Vec<(String, Value)>,
    pub order: Option<(String, SortDirection)>,
    /// (offset, limit)
    pub range: Option<(i64, i64)>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.order = Some((column.into(), direction));
        self
    }

    pub fn range(mut self, offset: i64, limit: i64) -> Self {
        self.range = Some((offset, limit));
        self
    }
}

/// A generated SQL statement plus its bind parameters, in order.
#[derive(Debug, Clone)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<Value>,
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_table(name: &str) -> Result<(), QueryError> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(QueryError::InvalidTable(name.to_string()))
    }
}

fn check_column(name: &str) -> Result<(), QueryError> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(QueryError::InvalidColumn(name.to_string()))
    }
}

/// Build the listing SQL. Rows come back as a single `row` JSON column so one
/// gateway serves every table without per-table column mapping.
///
/// String comparisons go through `"col"::text` so opaque string ids work
/// against uuid and text columns alike.
pub fn select_sql(table: &str, query: &SelectQuery) -> Result<SqlResult, QueryError> {
    check_table(table)?;

    let mut conditions = Vec::new();
    let mut params = Vec::new();
    for (column, value) in &query.filters {
        check_column(column)?;
        match value {
            Value::Null => conditions.push(format!("\"{}\" IS NULL", column)),
            Value::String(_) => {
                params.push(value.clone());
                conditions.push(format!("\"{}\"::text = ${}", column, params.len()));
            }
            _ => {
                params.push(value.clone());
                conditions.push(format!("\"{}\" = ${}", column, params.len()));
            }
        }
    }

    let mut inner = format!("SELECT * FROM \"{}\"", table);
    if !conditions.is_empty() {
        inner.push_str(&format!(" WHERE {}", conditions.join(" AND ")));
    }
    if let Some((column, direction)) = &query.order {
        check_column(column)?;
        inner.push_str(&format!(" ORDER BY \"{}\" {}", column, direction.to_sql()));
    }
    if let Some((offset, limit)) = query.range {
        if offset < 0 || limit < 0 {
            return Err(QueryError::InvalidRange(
                "offset and limit must be non-negative".to_string(),
            ));
        }
        inner.push_str(&format!(" LIMIT {} OFFSET {}", limit, offset));
    }

    Ok(SqlResult {
        query: format!("SELECT row_to_json(t) AS row FROM ({}) t", inner),
        params,
    })
}

pub fn select_by_id_sql(table: &str) -> Result<String, QueryError> {
    check_table(table)?;
    Ok(format!(
        "SELECT row_to_json(t) AS row FROM (SELECT * FROM \"{}\" WHERE \"id\"::text = $1) t",
        table
    ))
}

/// Build the insert SQL. The whole row travels as one jsonb parameter and
/// `jsonb_populate_record` coerces each value to its column type; columns
/// absent from the payload keep their store defaults (id, created_at,
/// is_hidden).
pub fn insert_sql(table: &str, row: &Map<String, Value>) -> Result<String, QueryError> {
    check_table(table)?;
    if row.is_empty() {
        return Err(QueryError::EmptyRow);
    }
    for column in row.keys() {
        check_column(column)?;
    }
    let columns = row
        .keys()
        .map(|k| format!("\"{}\"", k))
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!(
        "INSERT INTO \"{t}\" ({c}) SELECT {c} FROM jsonb_populate_record(NULL::\"{t}\", $1) RETURNING row_to_json(\"{t}\".*) AS row",
        t = table,
        c = columns,
    ))
}

/// Build the partial-update SQL. Only the patch's columns are assigned;
/// everything else on the row is untouched.
pub fn update_sql(table: &str, patch: &Map<String, Value>) -> Result<String, QueryError> {
    check_table(table)?;
    if patch.is_empty() {
        return Err(QueryError::EmptyRow);
    }
    for column in patch.keys() {
        check_column(column)?;
    }
    let columns = patch
        .keys()
        .map(|k| format!("\"{}\"", k))
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!(
        "UPDATE \"{t}\" SET ({c}) = (SELECT {c} FROM jsonb_populate_record(NULL::\"{t}\", $2)) WHERE \"id\"::text = $1 RETURNING row_to_json(\"{t}\".*) AS row",
        t = table,
        c = columns,
    ))
}

pub fn delete_sql(table: &str) -> Result<String, QueryError> {
    check_table(table)?;
    Ok(format!(
        "DELETE FROM \"{t}\" WHERE \"id\"::text = $1 RETURNING row_to_json(\"{t}\".*) AS row",
        t = table,
    ))
}
