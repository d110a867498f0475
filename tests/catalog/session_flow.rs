//! End-to-end session scenarios through the public facade.

use recipe_book::app::render::render_home;
use recipe_book::location::Location;
use recipe_book::logic::Breakpoints;
use recipe_book::state::{LoadState, SortField};
use recipe_book::sync::{Action, Session};

use super::fixtures::{catalog, ids, numbered};

/// Session at `width` loaded with `recipes` from `loc`.
fn session(loc: &str, width: u16, recipes: Vec<recipe_book::state::Recipe>) -> Session {
    let mut s = Session::new(Location::parse(loc), width, Breakpoints::default());
    s.finish_load::<String, String>(Ok(recipes), Ok(vec!["Even".into(), "Odd".into()]));
    s
}

#[test]
/// What: A shared link restores filters and page
///
/// Inputs:
/// - `?tag=odd&page=2` over 40 numbered recipes at width 130
///
/// Output:
/// - 20 odd recipes over two pages; page 2 holds the last eight odd ids.
fn integration_shared_link_restores_view() {
    let s = session("?tag=odd&page=2", 130, numbered(40));
    let view = s.view();
    assert_eq!(view.filtered_count, 20);
    assert_eq!(view.total_pages, 2);
    assert_eq!(ids(&view.visible), vec![25, 27, 29, 31, 33, 35, 37, 39]);
    assert_eq!(s.location().to_string(), "?tag=odd&page=2");
}

#[test]
/// What: The current page never exceeds the page count after any action
///
/// Inputs:
/// - A scripted walk of filters, sorts, pages and resizes over 50 recipes
///
/// Output:
/// - After each step `current_page <= max(total_pages, 1)` and the location agrees.
fn integration_page_invariant_holds() {
    let mut s = session("?page=5", 130, numbered(50));
    let script = vec![
        Action::LastPage,
        Action::Resize(60),
        Action::LastPage,
        Action::ToggleTag("Even".into()),
        Action::LastPage,
        Action::EditSearch("Recipe 1".into()),
        Action::SubmitSearch,
        Action::NextPage,
        Action::Resize(200),
        Action::Navigate(Location::parse("?page=99")),
        Action::ClearTags,
        Action::SetSort(SortField::Rating),
        Action::GoToPage(1000),
        Action::ClearSearch,
        Action::PrevPage,
        Action::FirstPage,
    ];
    for action in script {
        let label = action.name();
        s.apply(action);
        let pages = s.view().total_pages.max(1);
        assert!(
            s.query().current_page <= pages,
            "{label}: page {} of {pages}",
            s.query().current_page
        );
        if let Some(page) = s.location().get("page") {
            assert_eq!(
                page,
                s.query().current_page.to_string(),
                "{label}: location page out of step"
            );
        }
    }
}

#[test]
/// What: Filtering down to nothing shows the empty notice
///
/// Inputs:
/// - Catalog session searching for text no recipe has
///
/// Output:
/// - Zero results, no pagination controls, "No recipes found" rendered.
fn integration_empty_results_render() {
    let mut s = session("", 130, catalog());
    s.apply(Action::EditSearch("lasagna".into()));
    s.apply(Action::SubmitSearch);
    assert_eq!(s.view().filtered_count, 0);
    assert!(s.pagination().is_none());
    assert!(render_home(&s, 130).contains("No recipes found"));
}

#[test]
/// What: A failed recipe fetch leaves an empty catalog that still accepts actions
///
/// Inputs:
/// - Load with errors for both fetches, then a tag toggle
///
/// Output:
/// - `LoadState::Failed`, no tags, location still updated.
fn integration_failed_load_is_inert() {
    let mut s = Session::new(Location::parse("?page=4"), 100, Breakpoints::default());
    s.finish_load::<&str, &str>(Err("connection refused"), Err("connection refused"));
    assert!(matches!(s.load_state(), LoadState::Failed(_)));
    assert!(s.tags().is_empty());
    assert_eq!(s.query().current_page, 4);
    assert!(s.apply(Action::ToggleTag("Pizza".into())));
    assert_eq!(s.location().to_string(), "?page=1&tag=Pizza");
}

#[test]
/// What: `next` on an empty result set parked at the largest page
///
/// Inputs:
/// - `?q=zzz&page=18446744073709551615` loaded with no recipes, then `NextPage`
///
/// Output:
/// - The huge page survives loading untouched; `NextPage` clamps it to 1.
fn integration_next_page_with_max_page_and_no_results() {
    let mut s = session("?q=zzz&page=18446744073709551615", 120, Vec::new());
    assert_eq!(s.query().current_page, usize::MAX);
    s.apply(Action::NextPage);
    assert_eq!(s.query().current_page, 1);
    assert_eq!(s.location().to_string(), "?q=zzz&page=1");
}
