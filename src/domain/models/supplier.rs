use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    id: i64,
    name: String,
}

impl Supplier {
    pub fn reconstitute(id: i64, name: String) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Payload for creating a supplier.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSupplier {
    pub name: String,
}

impl NewSupplier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_input("supplier name must not be blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        assert!(NewSupplier::new("   ").validate().is_err());
        assert!(NewSupplier::new("Acme").validate().is_ok());
    }
}
