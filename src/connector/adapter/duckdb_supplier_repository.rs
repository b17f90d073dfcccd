use std::sync::Arc;

use async_trait::async_trait;
use duckdb::{params, Connection};
use tokio::sync::Mutex;

use crate::application::SupplierRepository;
use crate::domain::{DomainError, NewSupplier, Supplier};

pub struct DuckdbSupplierRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DuckdbSupplierRepository {
    /// The connection must come from [`super::open_inventory_database`] or
    /// [`super::open_in_memory_database`] so the `supplier` table exists.
    pub fn with_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl SupplierRepository for DuckdbSupplierRepository {
    async fn save(&self, supplier: &NewSupplier) -> Result<Supplier, DomainError> {
        let conn = self.conn.lock().await;
        let id: i64 = conn
            .query_row(
                "INSERT INTO supplier (name) VALUES (?1) RETURNING id",
                params![supplier.name],
                |row| row.get(0),
            )
            .map_err(|e| DomainError::storage(format!("Failed to save supplier: {}", e)))?;

        Ok(Supplier::reconstitute(id, supplier.name.clone()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Supplier>, DomainError> {
        let conn = self.conn.lock().await;
        match conn.query_row(
            "SELECT id, name FROM supplier WHERE id = ?1",
            params![id],
            |row| Ok(Supplier::reconstitute(row.get(0)?, row.get(1)?)),
        ) {
            Ok(supplier) => Ok(Some(supplier)),
            Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to query supplier by id: {}",
                e
            ))),
        }
    }

    async fn list(&self) -> Result<Vec<Supplier>, DomainError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare("SELECT id, name FROM supplier ORDER BY id")
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map([], |row| Ok(Supplier::reconstitute(row.get(0)?, row.get(1)?)))
            .map_err(|e| DomainError::storage(format!("Failed to query suppliers: {}", e)))?;

        let mut suppliers = Vec::new();
        for row in rows {
            suppliers
                .push(row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?);
        }
        Ok(suppliers)
    }
}
