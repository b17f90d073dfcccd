use anyhow::Result;

use crate::NewSupplier;

use super::super::Container;

pub struct SupplierController<'a> {
    container: &'a Container,
}

impl<'a> SupplierController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn add(&self, name: String) -> Result<String> {
        let use_case = self.container.create_supplier_use_case();
        let supplier = use_case.execute(NewSupplier::new(name)).await?;
        Ok(format!(
            "Created supplier {} ({})",
            supplier.name(),
            supplier.id()
        ))
    }

    pub async fn list(&self) -> Result<String> {
        let use_case = self.container.list_suppliers_use_case();
        let suppliers = use_case.execute().await?;

        if suppliers.is_empty() {
            return Ok("No suppliers.".to_string());
        }

        let mut output = "Suppliers:\n\n".to_string();
        for supplier in &suppliers {
            output.push_str(&format!("  {} ({})\n", supplier.name(), supplier.id()));
        }
        Ok(output.trim_end().to_string())
    }
}
