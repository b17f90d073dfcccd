mod ask_question;
mod create_product;
mod create_supplier;
mod get_product;
mod list_products;
mod list_suppliers;
mod prompt_composer;
mod query_mediator;
mod response_interpreter;
mod safe_statement;

pub use ask_question::*;
pub use create_product::*;
pub use create_supplier::*;
pub use get_product::*;
pub use list_products::*;
pub use list_suppliers::*;
pub use prompt_composer::*;
pub use query_mediator::*;
pub use response_interpreter::*;
pub use safe_statement::*;
