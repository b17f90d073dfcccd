use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use duckdb::Connection;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{
    AskQuestionUseCase, CompletionGateway, CreateProductUseCase, CreateSupplierUseCase,
    GetProductUseCase, ListProductsUseCase, ListSuppliersUseCase, ProductCache,
    ProductRepository, QueryExecutor, QueryMediator, SupplierRepository,
};
use crate::connector::adapter::{
    open_in_memory_database, open_inventory_database, DuckdbProductRepository,
    DuckdbQueryExecutor, DuckdbSupplierRepository, GroqCompletionGateway, InMemoryProductCache,
};

pub struct ContainerConfig {
    pub data_dir: String,
    /// Keep the inventory in an in-memory DuckDB instead of `<data_dir>/inventory.duckdb`.
    pub memory_storage: bool,
}

pub struct Container {
    product_repo: Arc<dyn ProductRepository>,
    supplier_repo: Arc<dyn SupplierRepository>,
    query_executor: Arc<dyn QueryExecutor>,
    product_cache: Arc<dyn ProductCache>,
    mediator: Arc<QueryMediator>,
}

impl Container {
    /// Build the production graph: DuckDB storage and the Groq gateway
    /// configured from the environment.
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let gateway = Arc::new(GroqCompletionGateway::from_env());
        debug!(
            "Using completion endpoint {} with model {} (timeout {:?})",
            gateway.url(),
            gateway.model_name(),
            gateway.timeout()
        );
        Self::with_gateway(config, gateway)
    }

    /// Same as [`Container::new`] but with a caller-supplied completion gateway.
    pub fn with_gateway(
        config: ContainerConfig,
        gateway: Arc<dyn CompletionGateway>,
    ) -> Result<Self> {
        let conn = Self::open_connection(&config)?;

        Ok(Self {
            product_repo: Arc::new(DuckdbProductRepository::with_connection(Arc::clone(&conn))),
            supplier_repo: Arc::new(DuckdbSupplierRepository::with_connection(Arc::clone(
                &conn,
            ))),
            query_executor: Arc::new(DuckdbQueryExecutor::with_connection(conn)),
            product_cache: Arc::new(InMemoryProductCache::new()),
            mediator: Arc::new(QueryMediator::new(gateway)),
        })
    }

    fn open_connection(config: &ContainerConfig) -> Result<Arc<Mutex<Connection>>> {
        if config.memory_storage {
            debug!("Using in-memory inventory storage");
            return Ok(open_in_memory_database()?);
        }

        std::fs::create_dir_all(&config.data_dir)?;
        let db_path = PathBuf::from(&config.data_dir).join("inventory.duckdb");
        Ok(open_inventory_database(&db_path)?)
    }

    pub fn mediator(&self) -> Arc<QueryMediator> {
        self.mediator.clone()
    }

    pub fn ask_use_case(&self) -> AskQuestionUseCase {
        AskQuestionUseCase::new(self.mediator.clone(), self.query_executor.clone())
    }

    pub fn create_product_use_case(&self) -> CreateProductUseCase {
        CreateProductUseCase::new(self.product_repo.clone(), self.supplier_repo.clone())
    }

    pub fn get_product_use_case(&self) -> GetProductUseCase {
        GetProductUseCase::new(self.product_repo.clone(), self.product_cache.clone())
    }

    pub fn list_products_use_case(&self) -> ListProductsUseCase {
        ListProductsUseCase::new(self.product_repo.clone())
    }

    pub fn create_supplier_use_case(&self) -> CreateSupplierUseCase {
        CreateSupplierUseCase::new(self.supplier_repo.clone())
    }

    pub fn list_suppliers_use_case(&self) -> ListSuppliersUseCase {
        ListSuppliersUseCase::new(self.supplier_repo.clone())
    }
}
