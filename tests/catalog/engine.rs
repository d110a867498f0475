//! Engine properties: tag and text filtering, stable sorting, pagination.

use recipe_book::logic::{
    PaginationControls, compute_view, filter_by_tags, filter_by_text, page_items, sort_recipes,
    total_pages,
};
use recipe_book::state::{PageItem, QueryState, SortDirection, SortField};

use super::fixtures::{catalog, ids, recipe};

/// Render page items as a compact string like `1 ... 4 5 6 ... 10`.
fn strip(current: usize, total: usize) -> String {
    page_items(current, total)
        .iter()
        .map(|i| match i {
            PageItem::Page { number } => number.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
/// What: Tag filter keeps exactly the recipes sharing any selected tag
///
/// Inputs:
/// - Every non-empty subset of a tag pool, in mixed case
///
/// Output:
/// - Result equals the brute-force case-insensitive intersection, in dataset order.
fn integration_tag_filter_matches_intersection() {
    let all = catalog();
    let pool = ["ITALIAN", "vegetarian", "Dessert", "nope"];
    for mask in 1u32..(1 << pool.len()) {
        let selected: Vec<String> = pool
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, t)| (*t).to_string())
            .collect();
        let got = ids(&filter_by_tags(all.iter().collect(), &selected));
        let expected: Vec<u64> = all
            .iter()
            .filter(|r| {
                r.tags
                    .iter()
                    .any(|t| selected.iter().any(|s| s.eq_ignore_ascii_case(t)))
            })
            .map(|r| r.id)
            .collect();
        assert_eq!(got, expected, "selection {selected:?}");
    }
}

#[test]
/// What: Empty tag selection returns the list unchanged
///
/// Inputs:
/// - Full catalog, no tags
///
/// Output:
/// - All ids in dataset order.
fn integration_tag_filter_empty_selection() {
    let all = catalog();
    assert_eq!(ids(&filter_by_tags(all.iter().collect(), &[])), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
/// What: Text filtering is idempotent and case-insensitive
///
/// Inputs:
/// - Several search strings including blanks
///
/// Output:
/// - Filtering twice equals filtering once; blanks keep everything.
fn integration_text_filter_idempotent() {
    let all = catalog();
    for s in ["chicken", "CHICKEN", " pasta ", "", "   ", "zzz", "a"] {
        let once = filter_by_text(all.iter().collect(), s);
        let twice = filter_by_text(once.clone(), s);
        assert_eq!(ids(&once), ids(&twice), "search {s:?}");
    }
    assert_eq!(ids(&filter_by_text(all.iter().collect(), "CHICKEN")), vec![4, 5]);
    assert_eq!(filter_by_text(all.iter().collect(), "  ").len(), all.len());
}

#[test]
/// What: Distinct keys reverse exactly between directions
///
/// Inputs:
/// - Recipes with distinct calories
///
/// Output:
/// - Descending order is the reverse of ascending order.
fn integration_sort_distinct_values_reverse() {
    let all = catalog();
    let mut asc: Vec<_> = all.iter().collect();
    sort_recipes(&mut asc, SortField::CaloriesPerServing, SortDirection::Ascending);
    let mut desc: Vec<_> = all.iter().collect();
    sort_recipes(&mut desc, SortField::CaloriesPerServing, SortDirection::Descending);
    let mut reversed = ids(&asc);
    reversed.reverse();
    assert_eq!(ids(&desc), reversed);
    assert_eq!(ids(&asc), vec![7, 3, 6, 2, 1, 5, 4]);
}

#[test]
/// What: Ties keep input order in both directions
///
/// Inputs:
/// - Ratings with ties (4.6: 1,4; 4.7: 2,7; 4.9: 3,5)
///
/// Output:
/// - Tied ids stay in dataset order ascending and descending.
fn integration_sort_ties_are_stable() {
    let all = catalog();
    let mut asc: Vec<_> = all.iter().collect();
    sort_recipes(&mut asc, SortField::Rating, SortDirection::Ascending);
    assert_eq!(ids(&asc), vec![6, 1, 4, 2, 7, 3, 5]);
    let mut desc: Vec<_> = all.iter().collect();
    sort_recipes(&mut desc, SortField::Rating, SortDirection::Descending);
    assert_eq!(ids(&desc), vec![3, 5, 2, 7, 1, 4, 6]);
}

#[test]
/// What: Difficulty ranks unknown labels first
///
/// Inputs:
/// - Catalog with Easy, Medium, Hard and an unknown label
///
/// Output:
/// - Unknown (7), then Easy, Medium, Hard, ties in dataset order.
fn integration_sort_difficulty() {
    let all = catalog();
    let mut v: Vec<_> = all.iter().collect();
    sort_recipes(&mut v, SortField::Difficulty, SortDirection::Ascending);
    assert_eq!(ids(&v), vec![7, 1, 3, 6, 2, 4, 5]);
}

#[test]
/// What: Total pages is the ceiling division; no controls for zero or one page
///
/// Inputs:
/// - Counts 0, 1, 12, 13, 25 at page size 12
///
/// Output:
/// - 0, 1, 1, 2, 3; controls only for more than one page.
fn integration_total_pages_and_controls() {
    assert_eq!(total_pages(0, 12), 0);
    assert_eq!(total_pages(1, 12), 1);
    assert_eq!(total_pages(12, 12), 1);
    assert_eq!(total_pages(13, 12), 2);
    assert_eq!(total_pages(25, 12), 3);
    assert!(PaginationControls::build(1, 0).is_none());
    assert!(PaginationControls::build(1, 1).is_none());
    assert!(PaginationControls::build(1, 2).is_some());
}

#[test]
/// What: Page strips for the documented scenarios
///
/// Inputs:
/// - (1,10), (5,10), (2,3), (1,2), (3,3), (10,10), (4,10), (7,10)
///
/// Output:
/// - Strips with ellipses only where pages are skipped and no duplicates.
fn integration_page_strips() {
    assert_eq!(strip(1, 10), "1 2 ... 10");
    assert_eq!(strip(5, 10), "1 ... 4 5 6 ... 10");
    assert_eq!(strip(2, 3), "1 2 3");
    assert_eq!(strip(1, 2), "1 2");
    assert_eq!(strip(3, 3), "1 2 3");
    assert_eq!(strip(10, 10), "1 ... 9 10");
    assert_eq!(strip(4, 10), "1 ... 3 4 5 ... 10");
    assert_eq!(strip(7, 10), "1 ... 6 7 8 ... 10");
    assert!(page_items(1, 0).is_empty());
    assert_eq!(strip(1, 1), "1");
}

#[test]
/// What: Page strips never repeat a number and stay sorted
///
/// Inputs:
/// - Every (current, total) with 1 ≤ current ≤ total ≤ 15
///
/// Output:
/// - Strictly increasing page numbers starting at 1 and ending at total.
fn integration_page_strips_no_duplicates() {
    for total in 1..=15 {
        for current in 1..=total {
            let pages: Vec<usize> = page_items(current, total)
                .iter()
                .filter_map(|i| match i {
                    PageItem::Page { number } => Some(*number),
                    PageItem::Ellipsis => None,
                })
                .collect();
            assert!(pages.windows(2).all(|w| w[0] < w[1]), "{current}/{total}");
            assert_eq!(pages.first(), Some(&1));
            assert_eq!(pages.last(), Some(&total));
            assert!(pages.contains(&current));
        }
    }
}

#[test]
/// What: Full pipeline runs tags, then text, then sort, then slice
///
/// Inputs:
/// - Italian tag, search "a", calories descending, page size 2
///
/// Output:
/// - Page 1 holds the two highest-calorie matches; page 2 the rest; page 3 empty.
fn integration_pipeline_order() {
    let all = catalog();
    let base = QueryState::default()
        .with_tag_toggled("italian")
        .with_search_input("a")
        .with_submitted_search()
        .with_sort_field(SortField::CaloriesPerServing)
        .with_sort_direction_toggled()
        .with_page_size(2);
    let p1 = compute_view(&all, &base);
    assert_eq!(p1.filtered_count, 3);
    assert_eq!(p1.total_pages, 2);
    assert_eq!(ids(&p1.visible), vec![4, 1]);
    let p2 = compute_view(&all, &base.clone().with_page(2));
    assert_eq!(ids(&p2.visible), vec![7]);
    let p3 = compute_view(&all, &base.with_page(3));
    assert!(p3.visible.is_empty());
}

#[test]
/// What: Malformed records never break the pipeline
///
/// Inputs:
/// - Recipes with zeroed numbers and an empty difficulty
///
/// Output:
/// - Sorted by difficulty with the unknown first.
fn integration_pipeline_degenerate_records() {
    let all = vec![
        recipe(1, "A", 0.0, 0.0, "Hard", &[]),
        recipe(2, "B", 0.0, 0.0, "", &[]),
    ];
    let q = QueryState::default().with_sort_field(SortField::Difficulty);
    assert_eq!(ids(&compute_view(&all, &q).visible), vec![2, 1]);
}
