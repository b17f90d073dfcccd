use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ProductCache;
use crate::domain::Product;

/// Process-local product cache. Entries live until the process exits.
pub struct InMemoryProductCache {
    products: Arc<Mutex<HashMap<i64, Product>>>,
}

impl InMemoryProductCache {
    pub fn new() -> Self {
        Self {
            products: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryProductCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductCache for InMemoryProductCache {
    async fn get(&self, id: i64) -> Option<Product> {
        self.products.lock().await.get(&id).cloned()
    }

    async fn put(&self, product: Product) {
        self.products.lock().await.insert(product.id(), product);
    }

    async fn len(&self) -> usize {
        self.products.lock().await.len()
    }
}
