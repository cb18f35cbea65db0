//! Feed layer
//! - types.rs: Feed descriptions and their explicit lookup levels
//! - catalog.rs: Built-in catalog of kernel patch feeds
//! - error.rs: Catalog loading and validation errors

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::builtin_catalog;
pub use error::CatalogError;
pub use types::{Feed, KeyRole, Level};
