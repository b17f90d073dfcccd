use anyhow::Result;

use crate::{NewProduct, Product};

use super::super::Container;

pub struct ProductController<'a> {
    container: &'a Container,
}

impl<'a> ProductController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn add(
        &self,
        name: String,
        quantity: i32,
        price: f64,
        supplier_id: i64,
    ) -> Result<String> {
        let use_case = self.container.create_product_use_case();
        let product = use_case
            .execute(NewProduct::new(name, quantity, price, supplier_id))
            .await?;
        Ok(format!(
            "Created product {} ({})",
            product.name(),
            product.id()
        ))
    }

    pub async fn get(&self, id: i64) -> Result<String> {
        let use_case = self.container.get_product_use_case();
        let product = use_case.execute(id).await?;
        Ok(self.format_product(&product).trim_end().to_string())
    }

    pub async fn list(&self) -> Result<String> {
        let use_case = self.container.list_products_use_case();
        let products = use_case.execute().await?;

        if products.is_empty() {
            return Ok("No products.".to_string());
        }

        let mut output = "Products:\n\n".to_string();
        for product in &products {
            output.push_str(&self.format_product(product));
            output.push('\n');
        }
        Ok(output.trim_end().to_string())
    }

    fn format_product(&self, product: &Product) -> String {
        let supplier = product
            .supplier()
            .map(|s| format!("{} ({})", s.name(), s.id()))
            .unwrap_or_else(|| "(none)".to_string());
        format!(
            "  {} ({})\n    Quantity: {}, Price: {:.2}\n    Supplier: {}\n",
            product.name(),
            product.id(),
            product.quantity(),
            product.price(),
            supplier
        )
    }
}
