use async_trait::async_trait;

use crate::domain::{DomainError, NewProduct, Product};

/// Persistence for products. Reads load the product's supplier eagerly.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product and return it with its assigned id.
    ///
    /// Callers are expected to have checked that `product.supplier_id` exists.
    async fn save(&self, product: &NewProduct) -> Result<Product, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError>;

    async fn list(&self) -> Result<Vec<Product>, DomainError>;
}
