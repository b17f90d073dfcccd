use std::sync::Arc;

use tracing::info;

use crate::application::{ProductRepository, SupplierRepository};
use crate::domain::{DomainError, NewProduct, Product};

/// Use case for creating a product under an existing supplier.
pub struct CreateProductUseCase {
    product_repo: Arc<dyn ProductRepository>,
    supplier_repo: Arc<dyn SupplierRepository>,
}

impl CreateProductUseCase {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        supplier_repo: Arc<dyn SupplierRepository>,
    ) -> Self {
        Self {
            product_repo,
            supplier_repo,
        }
    }

    pub async fn execute(&self, request: NewProduct) -> Result<Product, DomainError> {
        request.validate()?;

        self.supplier_repo
            .find_by_id(request.supplier_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Supplier not found with id: {}",
                    request.supplier_id
                ))
            })?;

        let product = self.product_repo.save(&request).await?;
        info!("Created product {} ({})", product.name(), product.id());

        Ok(product)
    }
}
