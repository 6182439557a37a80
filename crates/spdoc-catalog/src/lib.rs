//! Stored-procedure catalog: the immutable list the documentation is built from.

#![deny(unsafe_code)]

mod catalog;
mod error;
mod loader;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use loader::{BUILTIN_CATALOG, load_builtin_catalog, load_catalog, parse_catalog};
