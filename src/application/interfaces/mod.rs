mod completion_gateway;
mod product_cache;
mod product_repository;
mod query_executor;
mod supplier_repository;

pub use completion_gateway::*;
pub use product_cache::*;
pub use product_repository::*;
pub use query_executor::*;
pub use supplier_repository::*;
