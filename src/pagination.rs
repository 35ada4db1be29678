//! Page slicing with pagination metadata.
//!
//! Pages are 1-indexed. Out-of-range requests (page 0, a page past the end,
//! or a page size of zero) return an empty slice alongside accurate totals
//! rather than an error, so callers can render "no more results" directly.

use serde::Serialize;

/// Totals and navigation flags for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    /// `ceil(total_items / page_size)`; zero for an empty collection.
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// One page of items plus its [`Pagination`] metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Slice page `page` (1-indexed) of `page_size` items out of `items`.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Paginated<T> {
    let total = items.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    };

    let (slice, has_next_page) = if page == 0 || page_size == 0 {
        (&items[..0], false)
    } else {
        let start = (page - 1).saturating_mul(page_size);
        let end = start.saturating_add(page_size);
        if start >= total {
            (&items[..0], false)
        } else {
            (&items[start..end.min(total)], end < total)
        }
    };

    Paginated {
        items: slice.to_vec(),
        pagination: Pagination {
            current_page: page,
            total_pages,
            total_items: total,
            has_next_page,
            has_prev_page: page > 1,
        },
    }
}
