//! # Cart
//!
//! Client-side shopping cart. One line per distinct product, quantities
//! only ever go up until the whole line is removed. Checkout is a mocked
//! acknowledgment that leaves the cart untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Product, ProductId};

/// One aggregated cart entry
///
/// `title` and `price` are copied from the product on first add and are not
/// refreshed by later adds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// `quantity * price`
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Insertion-ordered collection of cart lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`
    ///
    /// Bumps the existing line's quantity, or appends a new line with
    /// quantity 1 at the end.
    pub fn add_item(&mut self, product: &Product) -> &CartLine {
        let index = match self.lines.iter().position(|l| l.product_id == product.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
                index
            }
            None => {
                self.lines.push(CartLine::from_product(product));
                self.lines.len() - 1
            }
        };

        let line = &self.lines[index];
        tracing::debug!(
            product_id = line.product_id,
            quantity = line.quantity,
            "Added to cart"
        );
        line
    }

    /// Remove the whole line for `product_id`. Returns the removed line, if any.
    pub fn remove_item(&mut self, product_id: ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.product_id == product_id)?;
        let line = self.lines.remove(index);
        tracing::debug!(product_id, "Removed from cart");
        Some(line)
    }

    /// Sum of `quantity * price` over all lines
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Number of distinct products
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of units across all lines
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Acknowledge checkout. No payment happens and the cart is left as is.
    pub fn checkout(&self) -> CheckoutReceipt {
        let receipt = CheckoutReceipt {
            message: CHECKOUT_MESSAGE.to_string(),
            line_count: self.len(),
            item_count: self.item_count(),
            total: self.total(),
            placed_at: Utc::now(),
        };
        tracing::info!(
            lines = receipt.line_count,
            total = receipt.total,
            "Checkout acknowledged"
        );
        receipt
    }
}

const CHECKOUT_MESSAGE: &str = "Checkout successful!";

/// Confirmation shown after checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub message: String,
    pub line_count: usize,
    pub item_count: u64,
    pub total: f64,
    pub placed_at: DateTime<Utc>,
}
