use std::sync::Arc;

use crate::application::SupplierRepository;
use crate::domain::{DomainError, Supplier};

pub struct ListSuppliersUseCase {
    supplier_repo: Arc<dyn SupplierRepository>,
}

impl ListSuppliersUseCase {
    pub fn new(supplier_repo: Arc<dyn SupplierRepository>) -> Self {
        Self { supplier_repo }
    }

    pub async fn execute(&self) -> Result<Vec<Supplier>, DomainError> {
        self.supplier_repo.list().await
    }
}
