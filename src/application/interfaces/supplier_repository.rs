use async_trait::async_trait;

use crate::domain::{DomainError, NewSupplier, Supplier};

/// Persistence for suppliers.
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// Insert a supplier and return it with its assigned id.
    async fn save(&self, supplier: &NewSupplier) -> Result<Supplier, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Supplier>, DomainError>;

    async fn list(&self) -> Result<Vec<Supplier>, DomainError>;
}
