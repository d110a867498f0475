use crate::state::Recipe;

/// What: Keep recipes carrying at least one of the selected tags.
///
/// Inputs:
/// - `recipes`: Candidates in dataset order
/// - `selected_tags`: Selected tags (any case)
///
/// Output:
/// - Matching recipes in their original relative order.
///
/// Details:
/// - OR semantics: one shared tag is enough.
/// - Comparison ignores case on both sides.
/// - An empty selection keeps every recipe.
pub fn filter_by_tags<'a>(recipes: Vec<&'a Recipe>, selected_tags: &[String]) -> Vec<&'a Recipe> {
    if selected_tags.is_empty() {
        return recipes;
    }
    let wanted: Vec<String> = selected_tags.iter().map(|t| t.to_lowercase()).collect();
    recipes
        .into_iter()
        .filter(|r| wanted.iter().any(|w| r.has_tag_lower(w)))
        .collect()
}

/// What: Keep recipes whose name contains the search text.
///
/// Inputs:
/// - `recipes`: Candidates in current order
/// - `query`: Submitted search text
///
/// Output:
/// - Matching recipes in their original relative order.
///
/// Details:
/// - Case-insensitive substring match on the name.
/// - The query is trimmed first; empty or whitespace-only text keeps everything.
pub fn filter_by_text<'a>(recipes: Vec<&'a Recipe>, query: &str) -> Vec<&'a Recipe> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return recipes;
    }
    recipes
        .into_iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}
