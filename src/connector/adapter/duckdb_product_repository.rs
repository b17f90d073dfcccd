use std::sync::Arc;

use async_trait::async_trait;
use duckdb::{params, Connection, Row};
use tokio::sync::Mutex;

use crate::application::ProductRepository;
use crate::domain::{DomainError, NewProduct, Product, Supplier};

const SELECT_PRODUCT: &str = "\
    SELECT p.id, p.name, p.quantity, p.price, s.id, s.name \
    FROM product p LEFT JOIN supplier s ON s.id = p.supplier_id";

pub struct DuckdbProductRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DuckdbProductRepository {
    /// The connection must come from [`super::open_inventory_database`] or
    /// [`super::open_in_memory_database`] so the `product` table exists.
    pub fn with_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn map_row(row: &Row<'_>) -> duckdb::Result<Product> {
        let supplier_id: Option<i64> = row.get(4)?;
        let supplier_name: Option<String> = row.get(5)?;
        let supplier = supplier_id
            .zip(supplier_name)
            .map(|(id, name)| Supplier::reconstitute(id, name));

        Ok(Product::reconstitute(
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            supplier,
        ))
    }

    fn load(conn: &Connection, id: i64) -> Result<Option<Product>, DomainError> {
        let sql = format!("{SELECT_PRODUCT} WHERE p.id = ?1");
        match conn.query_row(&sql, params![id], Self::map_row) {
            Ok(product) => Ok(Some(product)),
            Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to query product by id: {}",
                e
            ))),
        }
    }
}

#[async_trait]
impl ProductRepository for DuckdbProductRepository {
    async fn save(&self, product: &NewProduct) -> Result<Product, DomainError> {
        let conn = self.conn.lock().await;
        let id: i64 = conn
            .query_row(
                "INSERT INTO product (name, quantity, price, supplier_id) \
                 VALUES (?1, ?2, ?3, ?4) RETURNING id",
                params![
                    product.name,
                    product.quantity,
                    product.price,
                    product.supplier_id
                ],
                |row| row.get(0),
            )
            .map_err(|e| DomainError::storage(format!("Failed to save product: {}", e)))?;

        Self::load(&conn, id)?
            .ok_or_else(|| DomainError::internal(format!("Product {} vanished after insert", id)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let conn = self.conn.lock().await;
        Self::load(&conn, id)
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let conn = self.conn.lock().await;
        let sql = format!("{SELECT_PRODUCT} ORDER BY p.id");
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map([], Self::map_row)
            .map_err(|e| DomainError::storage(format!("Failed to query products: {}", e)))?;

        let mut products = Vec::new();
        for row in rows {
            products
                .push(row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?);
        }
        Ok(products)
    }
}
