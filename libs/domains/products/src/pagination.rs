//! Page requests and page results
//!
//! Pure values, no I/O. A [`PageQuery`] can only be built through
//! [`PageQuery::new`], so every query in circulation has a page size of at
//! least one. Pages are always ordered by category ascending, then by id.

use serde::Serialize;
use validator::{Validate, ValidationErrors};

/// Which page, how large, filtered by which category
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct PageQuery {
    category: Option<String>,
    page_index: u64,
    #[validate(range(min = 1))]
    page_size: u64,
}

impl PageQuery {
    /// Fails when `page_size` is zero. `page_index` is not clamped: a page
    /// past the end is a valid request with an empty result.
    pub fn new(
        category: Option<String>,
        page_index: u64,
        page_size: u64,
    ) -> Result<Self, ValidationErrors> {
        let query = Self {
            category,
            page_index,
            page_size,
        };
        query.validate()?;
        Ok(query)
    }

    /// The category to match exactly, or `None` to match every record.
    ///
    /// An empty category string matches everything too.
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|category| !category.is_empty())
    }

    /// Whether a record with `category` belongs in this query's result set
    pub fn matches(&self, category: &str) -> bool {
        self.category_filter().is_none_or(|wanted| wanted == category)
    }

    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of records before this page; `None` if that overflows
    pub fn offset(&self) -> Option<u64> {
        self.page_index.checked_mul(self.page_size)
    }
}

/// `ceil(total_elements / page_size)`, and 0 for an empty result.
///
/// `page_size` must be non-zero, which a [`PageQuery`] guarantees.
pub fn total_pages(total_elements: u64, page_size: u64) -> u64 {
    if total_elements == 0 {
        0
    } else {
        total_elements.div_ceil(page_size)
    }
}

/// One page of results plus the totals across all pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_pages: u64,
    pub total_elements: u64,
    /// The page that was requested, even if it lies past the end
    pub page_index: u64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total_elements: u64, query: &PageQuery) -> Self {
        Self {
            items,
            total_pages: total_pages(total_elements, query.page_size()),
            total_elements,
            page_index: query.page_index(),
        }
    }

    /// Convert every item, keeping the totals
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            page_index: self.page_index,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page_index.saturating_add(1) < self.total_pages
    }
}
