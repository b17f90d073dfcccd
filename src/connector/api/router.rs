use anyhow::Result;

use crate::cli::{Commands, ProductCommands, SupplierCommands};

use super::container::Container;
use super::controller::{ProductController, QueryController, SupplierController};

pub struct Router<'a> {
    query_controller: QueryController<'a>,
    product_controller: ProductController<'a>,
    supplier_controller: SupplierController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            query_controller: QueryController::new(container),
            product_controller: ProductController::new(container),
            supplier_controller: SupplierController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { question } => self.query_controller.ask(question).await,
            Commands::Translate { question } => self.query_controller.translate(question).await,
            Commands::Product { command } => match command {
                ProductCommands::Add {
                    name,
                    quantity,
                    price,
                    supplier_id,
                } => {
                    self.product_controller
                        .add(name, quantity, price, supplier_id)
                        .await
                }
                ProductCommands::Get { id } => self.product_controller.get(id).await,
                ProductCommands::List => self.product_controller.list().await,
            },
            Commands::Supplier { command } => match command {
                SupplierCommands::Add { name } => self.supplier_controller.add(name).await,
                SupplierCommands::List => self.supplier_controller.list().await,
            },
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}
