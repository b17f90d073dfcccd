pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::Commands;

pub use application::{
    AskQuestionUseCase, CompletionGateway, CreateProductUseCase, CreateSupplierUseCase,
    GetProductUseCase, ListProductsUseCase, ListSuppliersUseCase, ProductCache,
    ProductRepository, PromptComposer, QueryExecutor, QueryMediator, QueryRow,
    ResponseInterpreter, SupplierRepository,
};

pub use connector::{
    DuckdbProductRepository, DuckdbQueryExecutor, DuckdbSupplierRepository,
    GroqCompletionGateway, InMemoryProductCache,
};

pub use domain::{
    CompletionEnvelope, Conversation, DomainError, EnvelopeKind, Interpretation, NewProduct,
    NewSupplier, Product, Role, SchemaDescription, Supplier,
};
