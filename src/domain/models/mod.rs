mod conversation;
mod envelope;
mod product;
mod schema;
mod supplier;

pub use conversation::*;
pub use envelope::*;
pub use product::*;
pub use schema::*;
pub use supplier::*;
