//! # Render
//!
//! Plain-text views of the storefront for the terminal.

use std::fmt::Write;

use storefront_core::cart::{Cart, CheckoutReceipt};
use storefront_core::catalog::{Query, SortMode, ViewResult, ALL_CATEGORIES};
use storefront_core::Product;

/// Characters of description shown on a grid card
const EXCERPT_CHARS: usize = 50;

pub fn price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// One page of the catalog with a pagination footer
pub fn catalog_page(view: &ViewResult, query: &Query) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Search: {:?}  Category: {}  Sort: {}",
        query.search(),
        query.category(),
        query.sort().display_name()
    );

    if view.items.is_empty() {
        let _ = writeln!(out, "No products on this page.");
    }

    for product in &view.items {
        let _ = writeln!(
            out,
            "[{:>4}] {:<40} {:>10}  {}",
            product.id,
            product.title,
            price(product.price),
            product.category
        );
        let _ = writeln!(out, "       {}", product.excerpt(EXCERPT_CHARS));
    }

    let _ = write!(out, "{}", pagination(view));
    out
}

/// Page buttons, the current one bracketed: `Pages: 1 [2] 3`
pub fn pagination(view: &ViewResult) -> String {
    if view.total_pages == 0 {
        return format!("Pages: none ({} matches)\n", view.total_matches);
    }

    let buttons: Vec<String> = view
        .pages()
        .map(|page| {
            if page == view.current_page {
                format!("[{}]", page)
            } else {
                page.to_string()
            }
        })
        .collect();

    format!(
        "Pages: {} ({} matches)\n",
        buttons.join(" "),
        view.total_matches
    )
}

/// Category selector entries, "all" first
pub fn category_list(categories: &[String]) -> String {
    let mut out = format!("{}\n", ALL_CATEGORIES);
    for category in categories {
        let _ = writeln!(out, "{}", category);
    }
    out
}

pub fn sort_modes() -> String {
    SortMode::all()
        .iter()
        .map(|mode| format!("{:<10} {}\n", mode.as_str(), mode.display_name()))
        .collect()
}

/// Detail view for one product
pub fn product_detail(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", product.title, product.id);
    if !product.thumbnail.is_empty() {
        let _ = writeln!(out, "Image: {}", product.thumbnail);
    }
    if !product.description.is_empty() {
        let _ = writeln!(out, "{}", product.description);
    }
    let _ = writeln!(out, "Category: {}", product.category);
    let _ = writeln!(out, "Price: {}", price(product.price));
    out
}

/// Cart panel with line subtotals and the total
pub fn cart(cart: &Cart) -> String {
    let mut out = format!("Cart ({} items)\n", cart.len());

    if cart.is_empty() {
        out.push_str("No items in cart.\n");
        return out;
    }

    for line in cart.lines() {
        let _ = writeln!(
            out,
            "[{:>4}] {} (x{})  {}",
            line.product_id,
            line.title,
            line.quantity,
            price(line.subtotal())
        );
    }
    let _ = writeln!(out, "Total: {}", price(cart.total()));
    out
}

pub fn receipt(receipt: &CheckoutReceipt) -> String {
    format!(
        "{} {} item(s), total {} at {}\n",
        receipt.message,
        receipt.item_count,
        price(receipt.total),
        receipt.placed_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}
