//! # Storefront Session
//!
//! Everything a storefront front end holds for one visitor: the catalog
//! load state, the current query, the cart and the product being inspected.
//! The derived page and category list are recomputed after every change, so
//! readers always see a view of the latest inputs.

use serde::Serialize;

use crate::cart::{Cart, CartLine, CheckoutReceipt};
use crate::catalog::{self, CatalogSource, CategoryFilter, Query, SortMode, ViewResult};
use crate::models::{Product, ProductId};

/// Where the catalog fetch stands
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum CatalogState {
    /// Fetch not finished yet
    Loading,
    /// Catalog available
    Ready(Vec<Product>),
    /// Fetch failed; the message is shown instead of the catalog
    Failed(String),
}

impl CatalogState {
    /// Products if the catalog is ready, otherwise an empty slice
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Ready(products) => products,
            CatalogState::Loading | CatalogState::Failed(_) => &[],
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogState::Ready(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// One visitor's storefront state
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: CatalogState,
    query: Query,
    cart: Cart,
    selected: Option<ProductId>,
    view: ViewResult,
    categories: Vec<String>,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(Query::default())
    }
}

impl Storefront {
    /// Start in the loading state with the given query
    pub fn new(query: Query) -> Self {
        let view = ViewResult::empty(query.page());
        Self {
            catalog: CatalogState::Loading,
            query,
            cart: Cart::new(),
            selected: None,
            view,
            categories: Vec::new(),
        }
    }

    /// Fetch the catalog once and switch to `Ready` or `Failed` in one step
    pub async fn load(&mut self, source: &dyn CatalogSource) {
        match source.fetch_products().await {
            Ok(products) => self.set_catalog(products),
            Err(e) => self.fail(e.to_string()),
        }
    }

    /// Install a fetched catalog and return to page 1
    pub fn set_catalog(&mut self, products: Vec<Product>) {
        self.catalog = CatalogState::Ready(products);
        self.query.set_page(1);
        self.refresh();
    }

    /// Record a failed fetch
    pub fn fail(&mut self, message: impl Into<String>) {
        self.catalog = CatalogState::Failed(message.into());
        self.selected = None;
        self.refresh();
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn view(&self) -> &ViewResult {
        &self.view
    }

    /// Distinct categories in first-seen order (without "all")
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.set_search(search);
        self.refresh();
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.query.set_category(category);
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.query.set_sort(sort);
        self.refresh();
    }

    /// Jump to a page without range checks
    pub fn set_page(&mut self, page: usize) {
        self.query.set_page(page);
        self.refresh();
    }

    /// Advance one page. Returns false when already on the last page.
    pub fn next_page(&mut self) -> bool {
        let page = self.query.page();
        if page >= self.view.total_pages {
            return false;
        }
        self.set_page(page + 1);
        true
    }

    /// Go back one page. Returns false when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        let page = self.query.page();
        if page <= 1 {
            return false;
        }
        // Coming back from an out-of-range page lands on the last real one
        let target = (page - 1).min(self.view.total_pages.max(1));
        self.set_page(target);
        true
    }

    /// Open the detail view for a product
    pub fn select(&mut self, id: ProductId) -> Option<&Product> {
        let product = catalog::find_product(self.catalog.products(), id)?;
        self.selected = Some(product.id);
        Some(product)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Product currently shown in the detail view
    pub fn selected(&self) -> Option<&Product> {
        let id = self.selected?;
        catalog::find_product(self.catalog.products(), id)
    }

    /// Add one unit of a catalog product. `None` if the id is not in the catalog.
    pub fn add_to_cart(&mut self, id: ProductId) -> Option<&CartLine> {
        let product = catalog::find_product(self.catalog.products(), id)?;
        Some(self.cart.add_item(product))
    }

    /// Drop the cart line for `id`. Removing an absent line is a no-op.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<CartLine> {
        self.cart.remove_item(id)
    }

    /// Mocked checkout; the cart is left unchanged
    pub fn checkout(&self) -> CheckoutReceipt {
        self.cart.checkout()
    }

    fn refresh(&mut self) {
        let products = self.catalog.products();
        self.view = if self.catalog.is_ready() {
            catalog::compute(products, &self.query)
        } else {
            ViewResult::empty(self.query.page())
        };
        self.categories = catalog::categories(products);
    }
}
