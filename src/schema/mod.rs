pub mod expr_type;
pub use expr_type::*;

pub mod document_schema;
pub use document_schema::*;
