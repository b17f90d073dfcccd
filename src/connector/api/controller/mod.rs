pub mod product_controller;
pub mod query_controller;
pub mod supplier_controller;

pub use product_controller::ProductController;
pub use query_controller::QueryController;
pub use supplier_controller::SupplierController;
