//! # Catalog
//!
//! Product catalog access and view derivation.
//!
//! ## Modules
//!
//! - `query` - Search, category, sort and page parameters
//! - `view` - Filter/sort/paginate engine producing a `ViewResult`
//! - `source` - Catalog sources (HTTP endpoint, in-memory list)

pub mod query;
pub mod source;
pub mod view;

pub use query::{CategoryFilter, Query, SortMode, ALL_CATEGORIES, DEFAULT_PAGE_SIZE};
pub use source::{decode_catalog, CatalogSource, HttpCatalogSource, StaticCatalogSource};
pub use view::{categories, compute, filter_and_sort, find_product, ViewResult};
