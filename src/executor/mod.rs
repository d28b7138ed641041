pub mod queryable;
pub use queryable::*;
