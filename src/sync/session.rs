//! Top-level page controller owning the loaded catalog and the query state.

use std::fmt::Display;

use super::url::{PARAM_PAGE, TransitionContext, transition};
use super::Action;
use crate::location::Location;
use crate::logic::{Breakpoints, CatalogView, PaginationControls, compute_view, page_size_for_width};
use crate::state::{LoadState, QueryState, Recipe};

/// Catalog session: the recipe list loaded once plus the state derived from
/// the location and user interactions.
///
/// Every mutation goes through [`Session::apply`], which keeps the current
/// page inside the result range afterwards.
#[derive(Clone, Debug)]
pub struct Session {
    /// Full recipe list in dataset order.
    recipes: Vec<Recipe>,
    /// Tag vocabulary offered for filtering.
    tags: Vec<String>,
    /// Outcome of the initial load.
    load_state: LoadState,
    /// Current query state.
    query: QueryState,
    /// Current location, kept in step with `query`.
    location: Location,
    /// Width thresholds for page sizes.
    breakpoints: Breakpoints,
}

impl Session {
    /// What: Start a session from a location and the initial viewport width.
    ///
    /// Inputs:
    /// - `location`: Initial location (e.g. from the command line)
    /// - `width`: Viewport width in columns
    /// - `breakpoints`: Width thresholds for page sizes
    ///
    /// Output:
    /// - Session in `LoadState::Loading` with the URL-backed state applied.
    #[must_use]
    pub fn new(location: Location, width: u16, breakpoints: Breakpoints) -> Self {
        let query = QueryState::from_location(&location)
            .with_page_size(page_size_for_width(width, breakpoints));
        Self {
            recipes: Vec::new(),
            tags: Vec::new(),
            load_state: LoadState::Loading,
            query,
            location,
            breakpoints,
        }
    }

    /// What: Record the outcome of the two initial fetches.
    ///
    /// Inputs:
    /// - `recipes`: Recipe list or the fetch error
    /// - `tags`: Tag vocabulary or the fetch error
    ///
    /// Output:
    /// - Updates the session; errors are logged, never returned.
    ///
    /// Details:
    /// - A failed recipe fetch leaves an empty catalog in `LoadState::Failed`.
    /// - A failed tag fetch leaves an empty vocabulary; the catalog still loads.
    /// - The page is reconciled against the freshly loaded list.
    pub fn finish_load<E1: Display, E2: Display>(
        &mut self,
        recipes: Result<Vec<Recipe>, E1>,
        tags: Result<Vec<String>, E2>,
    ) {
        match recipes {
            Ok(list) => {
                tracing::info!(count = list.len(), "recipes loaded");
                self.recipes = list;
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch recipes");
                self.recipes.clear();
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
        match tags {
            Ok(list) => {
                tracing::debug!(count = list.len(), "tags loaded");
                self.tags = list;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch tags");
                self.tags.clear();
            }
        }
        self.reconcile_page();
    }

    /// What: Apply one user interaction.
    ///
    /// Inputs:
    /// - `action`: Interaction to apply
    ///
    /// Output:
    /// - `true` when the location changed.
    ///
    /// Details:
    /// - Runs the pure transition, then resets the page to 1 if it fell outside
    ///   `[1, total_pages]` while results exist.
    pub fn apply(&mut self, action: Action) -> bool {
        let ctx = TransitionContext {
            filtered_count: self.view().filtered_count,
            breakpoints: self.breakpoints,
        };
        let before = self.location.clone();
        let (query, location) = transition(&self.query, &self.location, &action, ctx);
        self.query = query;
        self.location = location;
        self.reconcile_page();
        let changed = self.location != before;
        tracing::debug!(
            action = action.name(),
            location = %self.location,
            changed,
            "action applied"
        );
        changed
    }

    /// Reset an out-of-range page to 1 (only while results exist).
    fn reconcile_page(&mut self) {
        let pages = self.view().total_pages;
        if pages > 0 && self.query.current_page > pages {
            tracing::debug!(
                page = self.query.current_page,
                pages,
                "page out of range; resetting to 1"
            );
            self.query = self.query.clone().with_page(1);
            self.location.set(PARAM_PAGE, "1");
        }
    }

    /// Visible page for the current state.
    #[must_use]
    pub fn view(&self) -> CatalogView<'_> {
        compute_view(&self.recipes, &self.query)
    }

    /// Pagination controls, or `None` when there is at most one page.
    #[must_use]
    pub fn pagination(&self) -> Option<PaginationControls> {
        PaginationControls::build(self.query.current_page, self.view().total_pages)
    }

    /// Current query state.
    #[must_use]
    pub const fn query(&self) -> &QueryState {
        &self.query
    }

    /// Current location.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Full recipe list.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Tag vocabulary.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Outcome of the initial load.
    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }
}
