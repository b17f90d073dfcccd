use std::path::Path;
use std::sync::Arc;

use duckdb::Connection;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::DomainError;

/// Open (or create) the inventory database file and make sure its tables exist.
///
/// DuckDB only allows one write connection per file, so every adapter shares
/// the returned handle.
pub fn open_inventory_database(db_path: &Path) -> Result<Arc<Mutex<Connection>>, DomainError> {
    let conn = Connection::open(db_path)
        .map_err(|e| DomainError::storage(format!("Failed to open DuckDB database: {}", e)))?;
    initialize_schema(&conn)?;
    debug!("Opened inventory database at {}", db_path.display());

    Ok(Arc::new(Mutex::new(conn)))
}

pub fn open_in_memory_database() -> Result<Arc<Mutex<Connection>>, DomainError> {
    let conn = Connection::open_in_memory()
        .map_err(|e| DomainError::storage(format!("Failed to open DuckDB in-memory DB: {}", e)))?;
    initialize_schema(&conn)?;
    debug!("Opened in-memory inventory database");

    Ok(Arc::new(Mutex::new(conn)))
}

fn initialize_schema(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        r#"
        CREATE SEQUENCE IF NOT EXISTS supplier_id_seq START 1;
        CREATE SEQUENCE IF NOT EXISTS product_id_seq START 1;

        CREATE TABLE IF NOT EXISTS supplier (
            id BIGINT PRIMARY KEY DEFAULT nextval('supplier_id_seq'),
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS product (
            id BIGINT PRIMARY KEY DEFAULT nextval('product_id_seq'),
            name TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            price DOUBLE NOT NULL,
            supplier_id BIGINT REFERENCES supplier(id)
        );
        "#,
    )
    .map_err(|e| DomainError::storage(format!("Failed to initialize schema: {}", e)))?;

    debug!("DuckDB inventory schema initialized");
    Ok(())
}
