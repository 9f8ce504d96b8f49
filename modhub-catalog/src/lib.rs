//! Content catalog data model, YAML I/O, and read-only catalog sources.
//!
//! This crate defines the catalog schema (items, categories, resources, tags)
//! without any ranking logic. `modhub-search` consumes catalogs through the
//! [`CatalogSource`] trait.

pub mod source;
pub mod types;
pub mod yaml;

pub use source::{CatalogSource, MemoryCatalog, ResourceScope, SourceError};
pub use types::*;
pub use yaml::{
    CatalogData, YamlError, load_catalog, load_categories, load_items, load_resources, load_tags,
};
