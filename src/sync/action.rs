//! User interactions that change the query state.

use crate::location::Location;
use crate::state::SortField;

/// One discrete user interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Typing in the search box; nothing is applied yet.
    EditSearch(String),
    /// Submit the search box text as `q`.
    SubmitSearch,
    /// Empty the search box and drop `q`.
    ClearSearch,
    /// Select or deselect one tag.
    ToggleTag(String),
    /// Deselect every tag.
    ClearTags,
    /// Choose the sort field.
    SetSort(SortField),
    /// Flip ascending/descending.
    ToggleSortDirection,
    /// Jump to a page number.
    GoToPage(usize),
    /// Jump to page 1.
    FirstPage,
    /// One page back.
    PrevPage,
    /// One page forward.
    NextPage,
    /// Jump to the last page.
    LastPage,
    /// The viewport width changed.
    Resize(u16),
    /// Load a different location (back/forward or a pasted link).
    Navigate(Location),
}

impl Action {
    /// Short name used in log lines.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EditSearch(_) => "edit_search",
            Self::SubmitSearch => "submit_search",
            Self::ClearSearch => "clear_search",
            Self::ToggleTag(_) => "toggle_tag",
            Self::ClearTags => "clear_tags",
            Self::SetSort(_) => "set_sort",
            Self::ToggleSortDirection => "toggle_sort_direction",
            Self::GoToPage(_) => "go_to_page",
            Self::FirstPage => "first_page",
            Self::PrevPage => "prev_page",
            Self::NextPage => "next_page",
            Self::LastPage => "last_page",
            Self::Resize(_) => "resize",
            Self::Navigate(_) => "navigate",
        }
    }
}
