use serde::Serialize;

/// Number of items shown per page when the caller does not choose.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Page selection applied to list queries (1-based page numbers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Row offset of the first item on the selected page, `None` when it does
    /// not fit a SQL offset.
    pub fn offset(&self) -> Option<i64> {
        let rows = (self.page.max(1) - 1).checked_mul(self.per_page)?;
        i64::try_from(rows).ok()
    }

    pub fn limit(&self) -> i64 {
        i64::try_from(self.per_page).unwrap_or(i64::MAX)
    }
}

/// A single page of results together with its position in the full listing.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        Self {
            items,
            page,
            total_pages,
        }
    }
}
