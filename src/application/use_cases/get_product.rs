use std::sync::Arc;

use tracing::debug;

use crate::application::{ProductCache, ProductRepository};
use crate::domain::{DomainError, Product};

/// Looks a product up by id through the read-through cache.
///
/// Misses are loaded from the store and cached; unknown ids are not.
pub struct GetProductUseCase {
    product_repo: Arc<dyn ProductRepository>,
    cache: Arc<dyn ProductCache>,
}

impl GetProductUseCase {
    pub fn new(product_repo: Arc<dyn ProductRepository>, cache: Arc<dyn ProductCache>) -> Self {
        Self {
            product_repo,
            cache,
        }
    }

    pub async fn execute(&self, id: i64) -> Result<Product, DomainError> {
        if let Some(product) = self.cache.get(id).await {
            debug!("Product cache hit for id {}", id);
            return Ok(product);
        }

        debug!("Product cache miss for id {}", id);
        let product = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product not found"))?;

        self.cache.put(product.clone()).await;
        Ok(product)
    }
}
