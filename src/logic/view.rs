//! Filter → sort → paginate pipeline producing the visible page.

use serde::Serialize;

use super::{filter_by_tags, filter_by_text, page_slice, sort_recipes, total_pages};
use crate::state::{QueryState, Recipe};

/// Derived result of running the pipeline once.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView<'a> {
    /// Recipes on the current page, in display order.
    pub visible: Vec<&'a Recipe>,
    /// Recipes surviving both filters.
    pub filtered_count: usize,
    /// `ceil(filtered_count / page_size)`; 0 when nothing matched.
    pub total_pages: usize,
}

/// What: Compute the visible page for a query snapshot.
///
/// Inputs:
/// - `all`: Full recipe list in dataset order
/// - `query`: Current query state
///
/// Output:
/// - `CatalogView` with the page slice, filtered count and total pages.
///
/// Details:
/// - Fixed order: tag filter, text filter, sort, paginate.
/// - Pure: no logging, no clamping. An out-of-range page yields an empty slice.
#[must_use]
pub fn compute_view<'a>(all: &'a [Recipe], query: &QueryState) -> CatalogView<'a> {
    let by_tag = filter_by_tags(all.iter().collect(), &query.selected_tags);
    let mut filtered = filter_by_text(by_tag, &query.query);
    sort_recipes(&mut filtered, query.sort_field, query.sort_direction);

    let filtered_count = filtered.len();
    let visible = page_slice(&filtered, query.current_page, query.page_size).to_vec();
    CatalogView {
        visible,
        filtered_count,
        total_pages: total_pages(filtered_count, query.page_size),
    }
}
