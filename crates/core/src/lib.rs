//! # Storefront Core
//!
//! The logic behind the storefront: catalog derivation, the cart, and the
//! session state a front end holds while a visitor shops.
//!
//! ## Architecture
//!
//! - `models` - Product records from the remote catalog
//! - `catalog` - Query types, the filter/sort/paginate engine, catalog sources
//! - `cart` - Cart lines, totals and the mocked checkout
//! - `state` - Per-visitor session and layered configuration
//! - `error` - The catalog fetch error
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_core::catalog::{HttpCatalogSource, SortMode};
//! use storefront_core::state::{Storefront, StorefrontConfig};
//!
//! let config = StorefrontConfig::default().with_env();
//! let source = HttpCatalogSource::new(&config)?;
//! let mut store = Storefront::default();
//! store.load(&source).await;
//! store.set_sort(SortMode::PriceAsc);
//! store.add_to_cart(store.view().items[0].id);
//! println!("Total: {:.2}", store.cart().total());
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod models;
pub mod state;

pub use cart::{Cart, CartLine, CheckoutReceipt};
pub use error::CatalogFetchError;
pub use models::{Product, ProductId};
