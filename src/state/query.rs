//! User-controlled viewing parameters and their transitions.

use super::types::{SortDirection, SortField};

/// Default page size before the viewport has been measured.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Snapshot of everything the user controls about the result list.
///
/// Values are replaced wholesale: every transition consumes the old state
/// and returns the new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    /// Text currently in the search box; not applied until submitted.
    pub search_input: String,
    /// Submitted search text (the `q` parameter). Empty means no text filter.
    pub query: String,
    /// Selected tags in insertion order, unique ignoring case.
    pub selected_tags: Vec<String>,
    /// Active sort field. Session-only.
    pub sort_field: SortField,
    /// Active sort direction. Session-only.
    pub sort_direction: SortDirection,
    /// 1-based page number.
    pub current_page: usize,
    /// Recipes per page, derived from the viewport.
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            query: String::new(),
            selected_tags: Vec::new(),
            sort_field: SortField::None,
            sort_direction: SortDirection::Ascending,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    /// What: Check whether `tag` is selected, ignoring case.
    ///
    /// Inputs:
    /// - `tag`: Tag to look up.
    ///
    /// Output:
    /// - `true` when a selected tag equals `tag` case-insensitively.
    #[must_use]
    pub fn is_tag_selected(&self, tag: &str) -> bool {
        let needle = tag.to_lowercase();
        self.selected_tags.iter().any(|t| t.to_lowercase() == needle)
    }

    /// Replace the search box text without applying it.
    #[must_use]
    pub fn with_search_input(mut self, text: &str) -> Self {
        self.search_input = text.to_string();
        self
    }

    /// What: Apply the search box text as the active query.
    ///
    /// Inputs: none (uses `search_input`)
    ///
    /// Output:
    /// - State with `query` set to the trimmed input and page reset to 1.
    ///
    /// Details:
    /// - Whitespace-only input clears the query.
    #[must_use]
    pub fn with_submitted_search(mut self) -> Self {
        self.query = self.search_input.trim().to_string();
        self.current_page = 1;
        self
    }

    /// Empty both the search box and the active query; page resets to 1.
    #[must_use]
    pub fn with_search_cleared(mut self) -> Self {
        self.search_input.clear();
        self.query.clear();
        self.current_page = 1;
        self
    }

    /// What: Select `tag` if unselected, otherwise deselect it.
    ///
    /// Inputs:
    /// - `tag`: Tag to toggle; surrounding whitespace is ignored.
    ///
    /// Output:
    /// - Updated state with page reset to 1.
    ///
    /// Details:
    /// - Deselection removes every entry equal to `tag` ignoring case.
    /// - Selection appends `tag` as given so display order follows insertion.
    /// - A blank tag is a no-op: selection and page are both kept.
    #[must_use]
    pub fn with_tag_toggled(mut self, tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() {
            return self;
        }
        if self.is_tag_selected(tag) {
            let needle = tag.to_lowercase();
            self.selected_tags.retain(|t| t.to_lowercase() != needle);
        } else {
            self.selected_tags.push(tag.to_string());
        }
        self.current_page = 1;
        self
    }

    /// Drop every selected tag; page resets to 1.
    #[must_use]
    pub fn with_tags_cleared(mut self) -> Self {
        self.selected_tags.clear();
        self.current_page = 1;
        self
    }

    /// Change the sort field; page resets to 1, direction is kept.
    #[must_use]
    pub fn with_sort_field(mut self, field: SortField) -> Self {
        self.sort_field = field;
        self.current_page = 1;
        self
    }

    /// What: Flip the sort direction.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - State with the opposite direction; unchanged while no sort field is active.
    ///
    /// Details:
    /// - The page is deliberately left as is.
    #[must_use]
    pub fn with_sort_direction_toggled(mut self) -> Self {
        if self.sort_field != SortField::None {
            self.sort_direction = self.sort_direction.toggled();
        }
        self
    }

    /// Move to `page` (values below 1 become 1).
    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.current_page = page.max(1);
        self
    }

    /// Set the page size (values below 1 become 1).
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}
