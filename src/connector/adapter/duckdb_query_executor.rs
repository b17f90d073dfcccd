use std::sync::Arc;

use async_trait::async_trait;
use duckdb::types::Value;
use duckdb::Connection;
use serde_json::{Number, Value as JsonValue};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{ensure_single_statement, QueryExecutor, QueryRow};
use crate::domain::DomainError;

/// Runs mediated SQL on the shared inventory connection and returns rows as
/// JSON objects. Input holding more than one statement is refused.
pub struct DuckdbQueryExecutor {
    conn: Arc<Mutex<Connection>>,
}

impl DuckdbQueryExecutor {
    pub fn with_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn to_json(value: Value) -> JsonValue {
        match value {
            Value::Null => JsonValue::Null,
            Value::Boolean(b) => JsonValue::Bool(b),
            Value::TinyInt(i) => i.into(),
            Value::SmallInt(i) => i.into(),
            Value::Int(i) => i.into(),
            Value::BigInt(i) => i.into(),
            Value::HugeInt(i) => i64::try_from(i)
                .map(JsonValue::from)
                .unwrap_or_else(|_| JsonValue::String(i.to_string())),
            Value::UTinyInt(u) => u.into(),
            Value::USmallInt(u) => u.into(),
            Value::UInt(u) => u.into(),
            Value::UBigInt(u) => u.into(),
            Value::Float(f) => Self::float(f64::from(f)),
            Value::Double(f) => Self::float(f),
            Value::Decimal(d) => {
                let text = d.to_string();
                text.parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .map_or(JsonValue::String(text), JsonValue::Number)
            }
            Value::Text(s) => JsonValue::String(s),
            other => JsonValue::String(format!("{:?}", other)),
        }
    }

    /// NaN and infinities have no JSON representation.
    fn float(f: f64) -> JsonValue {
        Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)
    }
}

#[async_trait]
impl QueryExecutor for DuckdbQueryExecutor {
    async fn execute(&self, sql: &str) -> Result<Vec<QueryRow>, DomainError> {
        debug!("Executing SQL: {}", sql);
        // `prepare` would silently run every statement before the last.
        ensure_single_statement(sql)?;

        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| DomainError::storage(format!("Failed to prepare query: {}", e)))?;
        let mut rows = stmt
            .query([])
            .map_err(|e| DomainError::storage(format!("Failed to execute query: {}", e)))?;

        let mut columns: Option<Vec<String>> = None;
        let mut results = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?
        {
            let names = columns.get_or_insert_with(|| {
                row.as_ref()
                    .column_names()
                    .into_iter()
                    .map(|n| n.to_string())
                    .collect()
            });

            let mut record = QueryRow::new();
            for (i, name) in names.iter().enumerate() {
                let value: Value = row
                    .get(i)
                    .map_err(|e| DomainError::storage(format!("Failed to read column {}: {}", name, e)))?;
                record.insert(name.clone(), Self::to_json(value));
            }
            results.push(record);
        }

        debug!("Query returned {} rows", results.len());
        Ok(results)
    }
}
