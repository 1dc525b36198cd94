//! # Catalog Query
//!
//! The user-chosen search, filter, sort and pagination parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Products shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Sentinel category value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Keep catalog order
    #[default]
    Default,
    /// Cheapest first
    #[serde(alias = "priceLowHigh")]
    PriceAsc,
    /// Most expensive first
    #[serde(alias = "priceHighLow")]
    PriceDesc,
    /// Alphabetical by title
    #[serde(alias = "az")]
    TitleAsc,
}

impl SortMode {
    /// Get all sort modes
    pub fn all() -> Vec<SortMode> {
        vec![
            SortMode::Default,
            SortMode::PriceAsc,
            SortMode::PriceDesc,
            SortMode::TitleAsc,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAsc => "priceAsc",
            Self::PriceDesc => "priceDesc",
            Self::TitleAsc => "titleAsc",
        }
    }

    /// Label for selectors
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::PriceAsc => "Price Low → High",
            Self::PriceDesc => "Price High → Low",
            Self::TitleAsc => "Name A-Z",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "priceAsc" | "priceLowHigh" => Ok(Self::PriceAsc),
            "priceDesc" | "priceHighLow" => Ok(Self::PriceDesc),
            "titleAsc" | "az" => Ok(Self::TitleAsc),
            other => Err(format!(
                "Unknown sort mode '{}' (expected one of: default, priceAsc, priceDesc, titleAsc)",
                other
            )),
        }
    }
}

/// Category restriction; serialized as a plain string with `"all"` for [`CategoryFilter::All`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Whether a product category passes this filter (exact, case-sensitive)
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(category) => category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current catalog query
///
/// Fields are only reachable through setters so that changing the search,
/// category or sort always returns the query to page 1. The page itself is
/// never validated against the result size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QueryFields")]
pub struct Query {
    search: String,
    category: CategoryFilter,
    sort: SortMode,
    page: usize,
    page_size: usize,
}

/// Wire shape of a [`Query`]; converted through [`Query::new`] so a stored
/// page size of 0 gets the same coercion as one built in code
#[derive(Deserialize)]
struct QueryFields {
    #[serde(default)]
    search: String,
    #[serde(default)]
    category: CategoryFilter,
    #[serde(default)]
    sort: SortMode,
    #[serde(default = "default_page")]
    page: usize,
    #[serde(default = "default_page_size")]
    page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl From<QueryFields> for Query {
    fn from(fields: QueryFields) -> Self {
        Query::new(fields.page_size)
            .with_search(fields.search)
            .with_category(fields.category)
            .with_sort(fields.sort)
            .with_page(fields.page)
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Query {
    /// Create a query on page 1 with no search, all categories and default order.
    /// A page size of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            sort: SortMode::Default,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.set_search(search);
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.set_category(category);
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.set_sort(sort);
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.set_page(page);
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the search text and go back to page 1
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Replace the category filter and go back to page 1
    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.category = category.into();
        self.page = 1;
    }

    /// Replace the sort mode and go back to page 1
    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.page = 1;
    }

    /// Jump to a page. Out-of-range pages are allowed and render empty.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }
}
