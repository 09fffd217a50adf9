//! In-memory pagination over a fully materialized result set.

use serde::{Deserialize, Serialize};

use super::{FilterSelection, PageRequest};

/// Pagination block returned with every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Requested page (1-based).
    pub page: u32,
    /// Requested page size.
    pub limit: u32,
    /// Items across all pages.
    pub total: usize,
    /// `ceil(total / limit)`; zero for an empty result.
    pub total_pages: usize,
    /// `page < total_pages`.
    pub has_next: bool,
    /// `page > 1`.
    pub has_previous: bool,
}

impl Pagination {
    /// Compute the pagination block for `total` items.
    #[must_use]
    pub fn new(request: PageRequest, total: usize) -> Self {
        let limit = request.limit.max(1) as usize;
        let total_pages = total.div_ceil(limit);
        let page = request.page as usize;

        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Index range of the requested page, clamped to `total`.
    #[must_use]
    pub fn range(&self) -> std::ops::Range<usize> {
        let limit = self.limit.max(1) as usize;
        let start = (self.page.max(1) as usize - 1).saturating_mul(limit).min(self.total);
        let end = start.saturating_add(limit).min(self.total);
        start..end
    }
}

/// A page of items with its pagination block and the active filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: Pagination,
    /// Non-empty facet categories that produced this result.
    pub filters_applied: FilterSelection,
}

/// Slice one page out of `items` without touching the underlying data.
#[must_use]
pub fn paginate<T>(items: &[T], request: PageRequest) -> (&[T], Pagination) {
    let pagination = Pagination::new(request, items.len());
    (&items[pagination.range()], pagination)
}
