pub mod config;
pub mod session;

pub use config::{StorefrontConfig, DEFAULT_CATALOG_URL};
pub use session::{CatalogState, Storefront};
