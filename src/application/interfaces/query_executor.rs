use async_trait::async_trait;

use crate::domain::DomainError;

/// One result row keyed by column name, in column order.
pub type QueryRow = serde_json::Map<String, serde_json::Value>;

/// Runs a single SQL statement against the relational store.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, sql: &str) -> Result<Vec<QueryRow>, DomainError>;
}
