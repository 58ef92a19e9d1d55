//! Rune alphabet, definitions, and the immutable catalog.
mod catalog;
mod definition;
mod error;
mod symbol;

pub use catalog::RuneCatalog;
pub use definition::{Overcharge, RuneDefinition, RuneTag};
pub use error::CatalogError;
pub use symbol::RuneSymbol;
