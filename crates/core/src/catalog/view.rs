//! # Catalog View
//!
//! Derives the visible page of the catalog from the full product list and a
//! [`Query`]. Everything here is a pure function of its inputs.

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_provider::DataLocale;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::ops::RangeInclusive;

use super::query::{Query, SortMode};
use crate::models::{Product, ProductId};

/// The derived page of products for one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewResult {
    /// Products on the current page, in display order
    pub items: Vec<Product>,
    /// Number of pages needed for all matches (0 when nothing matches)
    pub total_pages: usize,
    /// Page the items were taken from
    pub current_page: usize,
    /// Number of products that passed the search and category filters
    pub total_matches: usize,
}

impl ViewResult {
    /// Empty view, used before the catalog is available
    pub fn empty(page: usize) -> Self {
        Self {
            items: Vec::new(),
            total_pages: 0,
            current_page: page,
            total_matches: 0,
        }
    }

    /// Page numbers for pagination controls
    pub fn pages(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Apply search, category filter and sort, returning the full ordered match list
pub fn filter_and_sort<'a>(catalog: &'a [Product], query: &Query) -> Vec<&'a Product> {
    let needle = query.search().to_lowercase();

    let mut matches: Vec<&Product> = catalog
        .iter()
        .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
        .filter(|p| query.category().matches(&p.category))
        .collect();

    // slice::sort_by is stable, equal keys keep their filtered order
    match query.sort() {
        SortMode::Default => {}
        SortMode::PriceAsc => matches.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => matches.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::TitleAsc => match title_collator() {
            Some(collator) => matches.sort_by(|a, b| collator.compare(&a.title, &b.title)),
            None => matches.sort_by(|a, b| fold_case_cmp(&a.title, &b.title)),
        },
    }

    matches
}

/// Derive the visible page for `query`
pub fn compute(catalog: &[Product], query: &Query) -> ViewResult {
    let matches = filter_and_sort(catalog, query);
    let page_size = query.page_size().max(1);
    let total_matches = matches.len();
    let total_pages = total_matches.div_ceil(page_size);

    // Page 0 has no valid start offset and renders empty, as does any page past the end
    let items = match query.page().checked_sub(1) {
        Some(index) => matches
            .into_iter()
            .skip(index.saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    tracing::debug!(
        search = %query.search(),
        category = %query.category(),
        sort = %query.sort(),
        page = query.page(),
        total_matches,
        total_pages,
        "Catalog view recomputed"
    );

    ViewResult {
        items,
        total_pages,
        current_page: query.page(),
        total_matches,
    }
}

/// Distinct categories in first-seen order, without the "all" sentinel
pub fn categories(catalog: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for product in catalog {
        if seen.insert(product.category.as_str()) {
            ordered.push(product.category.clone());
        }
    }
    ordered
}

/// Look up a product by id for the detail view
pub fn find_product(catalog: &[Product], id: ProductId) -> Option<&Product> {
    catalog.iter().find(|p| p.id == id)
}

/// Root-locale collator at tertiary strength: accents and case only break
/// ties after the base letters, punctuation sorts before letters, and
/// lowercase precedes uppercase.
fn title_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);

    match Collator::try_new(&DataLocale::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!("Title collator unavailable, falling back to case folding: {}", e);
            None
        }
    }
}

fn fold_case_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::query::CategoryFilter;

    fn fruit_catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Apple", "fruit", 10.0),
            Product::new(2, "Banana", "fruit", 5.0),
        ]
    }

    fn mixed_catalog(len: u64) -> Vec<Product> {
        let categories = ["phones", "laptops", "groceries"];
        (1..=len)
            .map(|id| {
                Product::new(
                    id,
                    format!("Item {:02}", id),
                    categories[(id % 3) as usize],
                    (id % 4) as f64 * 2.5,
                )
            })
            .collect()
    }

    #[test]
    fn test_price_ascending_example() {
        let query = Query::new(10).with_sort(SortMode::PriceAsc);
        let view = compute(&fruit_catalog(), &query);

        let titles: Vec<&str> = view.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Banana", "Apple"]);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let query = Query::new(10).with_search("ap");
        let view = compute(&fruit_catalog(), &query);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].title, "Apple");

        let query = Query::new(10).with_search("NAN");
        let view = compute(&fruit_catalog(), &query);
        assert_eq!(view.items[0].title, "Banana");
    }

    #[test]
    fn test_category_filter_is_exact() {
        let mut catalog = fruit_catalog();
        catalog.push(Product::new(3, "Carrot", "vegetables", 2.0));

        let view = compute(&catalog, &Query::new(10).with_category("vegetables"));
        assert_eq!(view.total_matches, 1);
        assert_eq!(view.items[0].id, 3);

        let view = compute(&catalog, &Query::new(10).with_category("Vegetables"));
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 0);

        let view = compute(&catalog, &Query::new(10).with_category(CategoryFilter::All));
        assert_eq!(view.total_matches, 3);
    }

    #[test]
    fn test_empty_catalog() {
        let view = compute(&[], &Query::default());
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.pages().count(), 0);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let catalog = mixed_catalog(10);
        let view = compute(&catalog, &Query::new(4).with_page(9));
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.current_page, 9);

        let view = compute(&catalog, &Query::new(4).with_page(0));
        assert!(view.items.is_empty());

        let view = compute(&catalog, &Query::new(4).with_page(usize::MAX));
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_page_length_never_exceeds_page_size() {
        let catalog = mixed_catalog(23);
        for page_size in 1..=9 {
            let total_pages = compute(&catalog, &Query::new(page_size)).total_pages;
            for page in 1..=total_pages + 1 {
                let view = compute(&catalog, &Query::new(page_size).with_page(page));
                assert!(view.items.len() <= page_size);
            }
        }
    }

    #[test]
    fn test_pages_concatenate_to_full_result() {
        let catalog = mixed_catalog(23);
        for sort in SortMode::all() {
            let base = Query::new(5).with_sort(sort).with_search("item 1");
            let full: Vec<ProductId> = filter_and_sort(&catalog, &base)
                .iter()
                .map(|p| p.id)
                .collect();

            let first = compute(&catalog, &base);
            let mut stitched = Vec::new();
            for page in first.pages() {
                let view = compute(&catalog, &base.clone().with_page(page));
                stitched.extend(view.items.iter().map(|p| p.id));
            }

            assert_eq!(stitched, full, "sort mode {}", sort);
            assert_eq!(first.total_pages, full.len().div_ceil(5));
        }
    }

    #[test]
    fn test_price_sort_is_stable() {
        let catalog = mixed_catalog(12);
        let view = compute(&catalog, &Query::new(50).with_sort(SortMode::PriceAsc));

        for pair in view.items.windows(2) {
            assert!(pair[0].price <= pair[1].price);
            if pair[0].price == pair[1].price {
                assert!(pair[0].id < pair[1].id, "ties must keep catalog order");
            }
        }

        let view = compute(&catalog, &Query::new(50).with_sort(SortMode::PriceDesc));
        for pair in view.items.windows(2) {
            assert!(pair[0].price >= pair[1].price);
            if pair[0].price == pair[1].price {
                assert!(pair[0].id < pair[1].id, "ties must keep catalog order");
            }
        }
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let catalog = vec![
            Product::new(1, "banana", "fruit", 1.0),
            Product::new(2, "Cherry", "fruit", 1.0),
            Product::new(3, "apple", "fruit", 1.0),
            Product::new(4, "Apple", "fruit", 1.0),
        ];
        let view = compute(&catalog, &Query::new(10).with_sort(SortMode::TitleAsc));
        let titles: Vec<&str> = view.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["apple", "Apple", "banana", "Cherry"]);
    }

    #[test]
    fn test_title_sort_accents_and_punctuation() {
        let titles = ["Zebra Mug", "Éclair Box", "Eggs", "a~b", "ab"];
        let catalog: Vec<Product> = titles
            .iter()
            .zip(1..)
            .map(|(title, id)| Product::new(id, *title, "misc", 1.0))
            .collect();

        let view = compute(&catalog, &Query::new(10).with_sort(SortMode::TitleAsc));
        let sorted: Vec<&str> = view.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(sorted, vec!["a~b", "ab", "Éclair Box", "Eggs", "Zebra Mug"]);
    }

    #[test]
    fn test_title_sort_keeps_duplicate_titles_in_order() {
        let catalog = vec![
            Product::new(1, "Lamp", "home", 3.0),
            Product::new(2, "Desk", "home", 1.0),
            Product::new(3, "Lamp", "home", 2.0),
        ];
        let view = compute(&catalog, &Query::new(10).with_sort(SortMode::TitleAsc));
        let ids: Vec<ProductId> = view.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = vec![
            Product::new(1, "Phone", "smartphones", 1.0),
            Product::new(2, "Laptop", "laptops", 1.0),
            Product::new(3, "Phone 2", "smartphones", 1.0),
            Product::new(4, "Perfume", "fragrances", 1.0),
        ];
        assert_eq!(
            categories(&catalog),
            vec!["smartphones", "laptops", "fragrances"]
        );
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn test_find_product() {
        let catalog = fruit_catalog();
        assert_eq!(find_product(&catalog, 2).map(|p| p.title.as_str()), Some("Banana"));
        assert!(find_product(&catalog, 99).is_none());
    }
}
