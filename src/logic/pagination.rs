//! Page arithmetic and the compact page-number strip.

use serde::Serialize;

use crate::state::PageItem;

/// What: Number of pages needed for `count` items.
///
/// Inputs:
/// - `count`: Filtered item count
/// - `page_size`: Items per page (0 is treated as 1)
///
/// Output:
/// - `ceil(count / page_size)`; `0` when there are no items.
#[must_use]
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    let size = if page_size == 0 { 1 } else { page_size };
    count.div_ceil(size)
}

/// What: Slice out one page.
///
/// Inputs:
/// - `items`: Full ordered list
/// - `page`: 1-based page number
/// - `page_size`: Items per page
///
/// Output:
/// - `items[(page-1)*size .. page*size]`, cut at the end of the list.
///
/// Details:
/// - Out-of-range pages (including 0) yield an empty slice; no clamping happens here.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// What: Build the compact page-number strip.
///
/// Inputs:
/// - `current`: Current 1-based page
/// - `total`: Total pages
///
/// Output:
/// - Page numbers and ellipsis markers in display order; empty when `total` is 0.
///
/// Details:
/// - Page 1 always comes first; an ellipsis follows it when `current > 3`.
/// - Then every page in `[max(2, current-1), min(total-1, current+1)]`.
/// - An ellipsis precedes the last page when `current < total - 2`.
/// - The last page closes the strip when `total > 1`.
/// - The bounds keep page numbers unique even for tiny totals.
#[must_use]
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    let mut items = vec![PageItem::Page { number: 1 }];
    if current > 3 {
        items.push(PageItem::Ellipsis);
    }
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    for number in start..=end {
        items.push(PageItem::Page { number });
    }
    if current + 2 < total {
        items.push(PageItem::Ellipsis);
    }
    if total > 1 {
        items.push(PageItem::Page { number: total });
    }
    items
}

/// Navigation strip shown under the result grid.
///
/// Each jump target is `None` when the corresponding control is disabled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationControls {
    /// Page the user is on.
    pub current: usize,
    /// Total pages.
    pub total: usize,
    /// Page numbers and gaps.
    pub items: Vec<PageItem>,
    /// Target of the "first page" control.
    pub first: Option<usize>,
    /// Target of the "previous page" control.
    pub prev: Option<usize>,
    /// Target of the "next page" control.
    pub next: Option<usize>,
    /// Target of the "last page" control.
    pub last: Option<usize>,
}

impl PaginationControls {
    /// What: Build controls for a result set.
    ///
    /// Inputs:
    /// - `current`: Current 1-based page
    /// - `total`: Total pages
    ///
    /// Output:
    /// - `None` when `total <= 1` (nothing to paginate); otherwise the full control set.
    ///
    /// Details:
    /// - First/previous are disabled on page 1; next/last on the last page.
    /// - Previous/next never leave `[1, total]`.
    #[must_use]
    pub fn build(current: usize, total: usize) -> Option<Self> {
        if total <= 1 {
            return None;
        }
        let on_first = current <= 1;
        let on_last = current >= total;
        Some(Self {
            current,
            total,
            items: page_items(current, total),
            first: (!on_first).then_some(1),
            prev: (!on_first).then(|| (current - 1).min(total)),
            next: (!on_last).then(|| (current + 1).max(1)),
            last: (!on_last).then_some(total),
        })
    }
}
