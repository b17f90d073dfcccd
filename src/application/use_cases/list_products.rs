use std::sync::Arc;

use crate::application::ProductRepository;
use crate::domain::{DomainError, Product};

pub struct ListProductsUseCase {
    product_repo: Arc<dyn ProductRepository>,
}

impl ListProductsUseCase {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self) -> Result<Vec<Product>, DomainError> {
        self.product_repo.list().await
    }
}
