use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Supplier};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: i64,
    name: String,
    quantity: i32,
    price: f64,
    /// Loaded eagerly with the product; `None` for rows whose supplier is gone.
    supplier: Option<Supplier>,
}

impl Product {
    pub fn reconstitute(
        id: i64,
        name: String,
        quantity: i32,
        price: f64,
        supplier: Option<Supplier>,
    ) -> Self {
        Self {
            id,
            name,
            quantity,
            price,
            supplier,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn supplier(&self) -> Option<&Supplier> {
        self.supplier.as_ref()
    }
}

/// Payload for creating a product. The supplier must already exist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub supplier_id: i64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, quantity: i32, price: f64, supplier_id: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            supplier_id,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_input("product name must not be blank"));
        }
        if self.quantity < 0 {
            return Err(DomainError::invalid_input(
                "product quantity must be zero or positive",
            ));
        }
        if self.price.is_nan() || self.price <= 0.0 {
            return Err(DomainError::invalid_input("product price must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_product_passes() {
        assert!(NewProduct::new("Widget", 0, 2.5, 1).validate().is_ok());
    }

    #[test]
    fn rejects_blank_name_negative_quantity_and_non_positive_price() {
        assert!(NewProduct::new("", 1, 1.0, 1).validate().is_err());
        assert!(NewProduct::new("Widget", -1, 1.0, 1).validate().is_err());
        assert!(NewProduct::new("Widget", 1, 0.0, 1).validate().is_err());
        assert!(NewProduct::new("Widget", 1, f64::NAN, 1).validate().is_err());
    }

    #[test]
    fn deserializes_camel_case_supplier_id() {
        let json = r#"{"name":"Bolt","quantity":10,"price":0.25,"supplierId":3}"#;
        let request: NewProduct = serde_json::from_str(json).unwrap();
        assert_eq!(request.supplier_id, 3);
        assert_eq!(request.name, "Bolt");
    }
}
