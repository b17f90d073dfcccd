use async_trait::async_trait;

use crate::domain::Product;

/// Read-through cache of products keyed by id.
#[async_trait]
pub trait ProductCache: Send + Sync {
    async fn get(&self, id: i64) -> Option<Product>;

    async fn put(&self, product: Product);

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
