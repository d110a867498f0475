use std::cmp::Ordering;

use crate::state::{Recipe, SortDirection, SortField};

/// What: Order recipes by the selected field and direction in-place.
///
/// Inputs:
/// - `recipes`: Filtered recipes in dataset order
/// - `field`: Sort field; [`SortField::None`] leaves the order untouched
/// - `direction`: Ascending puts lower values first; descending reverses the comparison
///
/// Output:
/// - Reorders `recipes`.
///
/// Details:
/// - Stable: ties keep their relative input order in both directions.
/// - Difficulty compares by rank (Easy=1, Medium=2, Hard=3, unknown=0).
pub fn sort_recipes(recipes: &mut [&Recipe], field: SortField, direction: SortDirection) {
    if field == SortField::None {
        return;
    }
    recipes.sort_by(|a, b| {
        let ord = field
            .key_of(a)
            .partial_cmp(&field.key_of(b))
            .unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}
