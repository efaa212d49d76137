// Service exports
pub mod catalog;

pub use catalog::{CardCatalog, CatalogError};
