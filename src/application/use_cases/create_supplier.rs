use std::sync::Arc;

use tracing::info;

use crate::application::SupplierRepository;
use crate::domain::{DomainError, NewSupplier, Supplier};

pub struct CreateSupplierUseCase {
    supplier_repo: Arc<dyn SupplierRepository>,
}

impl CreateSupplierUseCase {
    pub fn new(supplier_repo: Arc<dyn SupplierRepository>) -> Self {
        Self { supplier_repo }
    }

    pub async fn execute(&self, request: NewSupplier) -> Result<Supplier, DomainError> {
        request.validate()?;

        let supplier = self.supplier_repo.save(&request).await?;
        info!("Created supplier {} ({})", supplier.name(), supplier.id());

        Ok(supplier)
    }
}
