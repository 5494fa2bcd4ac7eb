//! Fixed-shape pagination metadata for the spender transactions view.

use serde::Serialize;

/// The number of items a page is declared to hold.
pub const PER_PAGE: u64 = 10;

/// Page numbers reported alongside a spender's transaction list.
///
/// These numbers are informational only: the view always returns every item
/// and there is no page request parameter, so `current_page` is always 1.
/// An item count that is an exact multiple of [PER_PAGE] reports one more
/// page than strictly necessary; clients parse these fields as-is, so the
/// arithmetic must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Always 1.
    pub current_page: u64,
    /// `item_count / PER_PAGE + 1`.
    pub total_pages: u64,
    /// Always [PER_PAGE].
    pub per_page: u64,
}

/// Compute the pagination metadata for a result set of `item_count` items.
pub fn paginate(item_count: usize) -> Pagination {
    Pagination {
        current_page: 1,
        total_pages: item_count as u64 / PER_PAGE + 1,
        per_page: PER_PAGE,
    }
}
