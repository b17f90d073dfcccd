mod duckdb_connection;
mod duckdb_product_repository;
mod duckdb_query_executor;
mod duckdb_supplier_repository;
mod groq_completion_gateway;
mod in_memory_product_cache;

pub use duckdb_connection::*;
pub use duckdb_product_repository::*;
pub use duckdb_query_executor::*;
pub use duckdb_supplier_repository::*;
pub use groq_completion_gateway::*;
pub use in_memory_product_cache::*;
