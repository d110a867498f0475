//! Location mirroring: which actions write which parameters.

use recipe_book::location::Location;
use recipe_book::logic::Breakpoints;
use recipe_book::state::{QueryState, SortField};
use recipe_book::sync::{Action, TransitionContext, transition};

/// Context for a result set of `filtered_count` recipes.
fn ctx(filtered_count: usize) -> TransitionContext {
    TransitionContext {
        filtered_count,
        breakpoints: Breakpoints::default(),
    }
}

/// State and location as loaded from `loc`.
fn at(loc: &str) -> (QueryState, Location) {
    let location = Location::parse(loc);
    (QueryState::from_location(&location), location)
}

#[test]
/// What: Toggling a selected tag removes it; toggling an unselected one adds it
///
/// Inputs:
/// - `?tag=Pizza&page=3`, toggle `pizza` then `Italian`
///
/// Output:
/// - Tag removed case-insensitively, then appended; page 1 both times.
fn integration_toggle_tag_resets_page() {
    let (q, loc) = at("?tag=Pizza&page=3");
    let (q, loc) = transition(&q, &loc, &Action::ToggleTag("pizza".into()), ctx(40));
    assert!(q.selected_tags.is_empty());
    assert_eq!(q.current_page, 1);
    assert_eq!(loc.to_string(), "?page=1");

    let (q, loc) = transition(&q, &loc, &Action::GoToPage(2), ctx(40));
    let (q, loc) = transition(&q, &loc, &Action::ToggleTag("Italian".into()), ctx(40));
    assert_eq!(q.selected_tags, vec!["Italian".to_string()]);
    assert_eq!(q.current_page, 1);
    assert_eq!(loc.get_all("tag"), vec!["Italian"]);
    assert_eq!(loc.get("page"), Some("1"));
}

#[test]
/// What: Blank search submits remove `q` instead of storing an empty string
///
/// Inputs:
/// - `?q=soup&page=2`, search box set to whitespace and submitted
///
/// Output:
/// - No `q` parameter; page 1.
fn integration_blank_search_removes_q() {
    let (q, loc) = at("?q=soup&page=2");
    let (q, loc) = transition(&q, &loc, &Action::EditSearch("   ".into()), ctx(10));
    assert_eq!(loc.get("q"), Some("soup"));
    let (q, loc) = transition(&q, &loc, &Action::SubmitSearch, ctx(10));
    assert!(!loc.has("q"));
    assert_eq!(q.query, "");
    assert_eq!(loc.get("page"), Some("1"));
}

#[test]
/// What: Submitted text is trimmed and encoded in the location
///
/// Inputs:
/// - Search `  chicken curry ` on an empty location
///
/// Output:
/// - `?q=chicken%20curry&page=1`; typing alone leaves the location untouched.
fn integration_search_submit_writes_q() {
    let (q, loc) = at("");
    let (q, loc) = transition(&q, &loc, &Action::EditSearch("  chicken curry ".into()), ctx(0));
    assert!(loc.is_empty());
    let (q, loc) = transition(&q, &loc, &Action::SubmitSearch, ctx(0));
    assert_eq!(q.query, "chicken curry");
    assert_eq!(loc.to_string(), "?q=chicken%20curry&page=1");
}

#[test]
/// What: Sort never reaches the location and survives navigation
///
/// Inputs:
/// - Sort by rating, flip direction, then navigate to another location
///
/// Output:
/// - Location only gains `page=1`; sort kept in memory after navigation.
fn integration_sort_is_session_only() {
    let (q, loc) = at("?tag=Dessert");
    let (q, loc) = transition(&q, &loc, &Action::SetSort(SortField::Rating), ctx(5));
    let (q, loc) = transition(&q, &loc, &Action::ToggleSortDirection, ctx(5));
    assert_eq!(loc.to_string(), "?tag=Dessert&page=1");
    let (q, loc) = transition(
        &q,
        &loc,
        &Action::Navigate(Location::parse("?q=cake&page=2")),
        ctx(5),
    );
    assert_eq!(q.sort_field, SortField::Rating);
    assert_eq!(q.query, "cake");
    assert!(q.selected_tags.is_empty());
    assert_eq!(q.current_page, 2);
    assert_eq!(loc.to_string(), "?q=cake&page=2");

    // A fresh load from the same location has no sort.
    let (fresh, _) = at(&loc.to_string());
    assert_eq!(fresh.sort_field, SortField::None);
}

#[test]
/// What: Page changes write `page` only and keep other parameters
///
/// Inputs:
/// - `?q=a&tag=X&utm=mail` with 30 results at 12 per page; next, last, next
///
/// Output:
/// - Pages 2, 3, 3 (clamped); `q`, `tag` and unknown keys preserved.
fn integration_page_navigation_preserves_params() {
    let (q, loc) = at("?q=a&tag=X&utm=mail");
    let (q, loc) = transition(&q, &loc, &Action::NextPage, ctx(30));
    assert_eq!(loc.to_string(), "?q=a&tag=X&utm=mail&page=2");
    let (q, loc) = transition(&q, &loc, &Action::LastPage, ctx(30));
    assert_eq!(q.current_page, 3);
    let (q, loc) = transition(&q, &loc, &Action::NextPage, ctx(30));
    assert_eq!(q.current_page, 3);
    assert_eq!(loc.to_string(), "?q=a&tag=X&utm=mail&page=3");
}

#[test]
/// What: Resizing resets the page only when it falls off the end
///
/// Inputs:
/// - 30 results on page 3 at 12 per page; widths 90 then 50, and 130 from page 5
///
/// Output:
/// - Page kept at width 90 (4 pages) and 50 (5 pages); reset from page 5 at width 130.
fn integration_resize_resets_out_of_range_page() {
    let (q, loc) = at("?page=3");
    let (q, loc) = transition(&q, &loc, &Action::Resize(90), ctx(30));
    assert_eq!((q.page_size, q.current_page), (8, 3));
    let (q, loc) = transition(&q, &loc, &Action::Resize(50), ctx(30));
    assert_eq!((q.page_size, q.current_page), (6, 3));
    let (q, loc) = transition(&q, &loc, &Action::GoToPage(5), ctx(30));
    let (q, loc) = transition(&q, &loc, &Action::Resize(130), ctx(30));
    assert_eq!((q.page_size, q.current_page), (12, 1));
    assert_eq!(loc.get("page"), Some("1"));
}
