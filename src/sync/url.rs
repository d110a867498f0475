//! Mirroring of the query state into the location.
//!
//! `q`, `tag` and `page` live in the location; sort field and direction are
//! session-only and are never written.

use super::Action;
use crate::location::Location;
use crate::logic::{Breakpoints, page_size_for_width, total_pages};
use crate::state::QueryState;

/// Search text parameter.
pub const PARAM_QUERY: &str = "q";
/// Tag parameter, repeated once per selected tag.
pub const PARAM_TAG: &str = "tag";
/// 1-based page parameter.
pub const PARAM_PAGE: &str = "page";

/// Facts about the current result set that some transitions need.
#[derive(Clone, Copy, Debug)]
pub struct TransitionContext {
    /// Recipes surviving the filters under the current state.
    pub filtered_count: usize,
    /// Viewport breakpoints for `Resize`.
    pub breakpoints: Breakpoints,
}

/// What: Read the `page` parameter.
///
/// Inputs:
/// - `raw`: Parameter value, if present
///
/// Output:
/// - Parsed page; `1` when missing, non-numeric, zero or negative.
///
/// Details:
/// - Leading digits are accepted (`"3abc"` → 3), like a lenient integer parse.
#[must_use]
pub fn parse_page(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return 1;
    };
    let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse::<usize>().ok().filter(|p| *p >= 1).unwrap_or(1)
}

/// What: Read the selected tags from the location.
///
/// Inputs:
/// - `location`: Parsed location
///
/// Output:
/// - Tags in parameter order; blanks dropped; case-insensitive duplicates collapse to the first.
#[must_use]
pub fn read_tags(location: &Location) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for raw in location.get_all(PARAM_TAG) {
        let tag = raw.trim();
        if tag.is_empty() {
            continue;
        }
        let lower = tag.to_lowercase();
        if out.iter().all(|t| t.to_lowercase() != lower) {
            out.push(tag.to_string());
        }
    }
    out
}

impl QueryState {
    /// What: Build the URL-backed part of the state from a location.
    ///
    /// Inputs:
    /// - `location`: Location to read
    ///
    /// Output:
    /// - State with `q`, tags and page from the location; sort at its defaults.
    ///
    /// Details:
    /// - The search box starts out holding `q`.
    #[must_use]
    pub fn from_location(location: &Location) -> Self {
        let query = location.get(PARAM_QUERY).unwrap_or_default().trim().to_string();
        Self {
            search_input: query.clone(),
            query,
            selected_tags: read_tags(location),
            current_page: parse_page(location.get(PARAM_PAGE)),
            ..Self::default()
        }
    }

    /// What: Re-read the URL-backed fields, keeping session-only ones.
    ///
    /// Inputs:
    /// - `location`: New location
    ///
    /// Output:
    /// - State with `q`, tags and page replaced; sort, page size and search box kept.
    #[must_use]
    pub fn reloaded_from(self, location: &Location) -> Self {
        let fresh = Self::from_location(location);
        Self {
            query: fresh.query,
            selected_tags: fresh.selected_tags,
            current_page: fresh.current_page,
            ..self
        }
    }
}

/// What: Apply one action to the query state and its location.
///
/// Inputs:
/// - `query`: Current state
/// - `location`: Current location
/// - `action`: Interaction to apply
/// - `ctx`: Result-set facts for page navigation and resizes
///
/// Output:
/// - The new `(state, location)` pair; inputs are left untouched.
///
/// Details:
/// - Search submit writes the trimmed text to `q`, or removes `q` when blank; page → 1.
/// - Tag toggles append or remove `tag` entries (case-insensitive removal); page → 1.
/// - Sort field changes write page → 1; direction toggles touch nothing in the location.
/// - Page navigation writes `page` only, clamped to `[1, total]`.
/// - A resize that changes the page size resets to page 1 when the page no longer exists.
#[must_use]
pub fn transition(
    query: &QueryState,
    location: &Location,
    action: &Action,
    ctx: TransitionContext,
) -> (QueryState, Location) {
    let mut loc = location.clone();
    let next = match action {
        Action::EditSearch(text) => query.clone().with_search_input(text),
        Action::SubmitSearch => {
            let next = query.clone().with_submitted_search();
            if next.query.is_empty() {
                loc.delete(PARAM_QUERY);
            } else {
                loc.set(PARAM_QUERY, next.query.clone());
            }
            loc.set(PARAM_PAGE, "1");
            next
        }
        Action::ClearSearch => {
            loc.delete(PARAM_QUERY);
            loc.set(PARAM_PAGE, "1");
            query.clone().with_search_cleared()
        }
        Action::ToggleTag(tag) => {
            let tag = tag.trim();
            if tag.is_empty() {
                return (query.clone(), loc);
            }
            if query.is_tag_selected(tag) {
                let needle = tag.to_lowercase();
                loc.delete_where(PARAM_TAG, |v| v.trim().to_lowercase() == needle);
            } else {
                loc.append(PARAM_TAG, tag);
            }
            loc.set(PARAM_PAGE, "1");
            query.clone().with_tag_toggled(tag)
        }
        Action::ClearTags => {
            loc.delete(PARAM_TAG);
            loc.set(PARAM_PAGE, "1");
            query.clone().with_tags_cleared()
        }
        Action::SetSort(field) => {
            loc.set(PARAM_PAGE, "1");
            query.clone().with_sort_field(*field)
        }
        Action::ToggleSortDirection => query.clone().with_sort_direction_toggled(),
        Action::GoToPage(_)
        | Action::FirstPage
        | Action::PrevPage
        | Action::NextPage
        | Action::LastPage => {
            let last = total_pages(ctx.filtered_count, query.page_size).max(1);
            let current = query.current_page;
            let target = match action {
                Action::GoToPage(n) => *n,
                Action::PrevPage => current.saturating_sub(1),
                Action::NextPage => current.saturating_add(1),
                Action::LastPage => last,
                _ => 1,
            }
            .clamp(1, last);
            loc.set(PARAM_PAGE, target.to_string());
            query.clone().with_page(target)
        }
        Action::Resize(width) => {
            let size = page_size_for_width(*width, ctx.breakpoints);
            if size == query.page_size {
                return (query.clone(), loc);
            }
            let mut next = query.clone().with_page_size(size);
            let pages = total_pages(ctx.filtered_count, size);
            if next.current_page > 1 && next.current_page > pages {
                next = next.with_page(1);
                loc.set(PARAM_PAGE, "1");
            }
            next
        }
        Action::Navigate(target) => {
            loc = target.clone();
            query.clone().reloaded_from(&loc)
        }
    };
    (next, loc)
}
