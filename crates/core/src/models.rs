//! # Storefront Models
//!
//! Product records as delivered by the remote catalog API.
//!
//! The catalog endpoint answers with a JSON document shaped like
//! `{ "products": [ { "id": 1, "title": "...", ... } ], "total": 194, ... }`.
//! Only the `products` array is read; every other field (envelope or product)
//! is ignored.

use serde::{Deserialize, Serialize};

/// Identifier of a product in the remote catalog
pub type ProductId = u64;

/// A product as sourced from the catalog
///
/// Products are read-only once fetched. Cart lines keep their own snapshot of
/// `title` and `price` instead of holding a reference to the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: ProductId,
    /// Display title, also the field searched by the catalog query
    pub title: String,
    /// Long description shown in the detail view
    #[serde(default)]
    pub description: String,
    /// Category name, matched exactly by the category filter
    pub category: String,
    /// Unit price (non-negative)
    pub price: f64,
    /// Thumbnail image URI
    #[serde(default)]
    pub thumbnail: String,
}

impl Product {
    /// Create a product with empty description and thumbnail
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            category: category.into(),
            price,
            thumbnail: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the thumbnail URI
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    /// Short description for grid cards: the first `max_chars` characters
    /// followed by `...`
    pub fn excerpt(&self, max_chars: usize) -> String {
        let head: String = self.description.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

/// Envelope returned by the catalog endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub products: Vec<Product>,
}
