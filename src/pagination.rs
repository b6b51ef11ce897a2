//! List pagination types.
//!
//! The teacher repo imports these from `pushkind_common::pagination`; they are
//! inlined here.

use serde::Serialize;

/// Default number of items returned per list page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

/// Pagination parameters applied to a list query.
#[derive(Debug, Clone)]
pub struct Pagination {
    /// 1-based page number requested by the caller.
    pub page: usize,
    /// Number of items per page.
    pub per_page: usize,
}

/// A single page of results plus the total page count.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    /// Items belonging to the requested page.
    pub items: Vec<T>,
    /// 1-based page number of this page.
    pub page: usize,
    /// Total number of pages available for the query.
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Assemble a paginated result from its parts.
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        Self {
            items,
            page,
            total_pages,
        }
    }
}
