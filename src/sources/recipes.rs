use serde_json::Value;

use crate::config::Settings;
use crate::state::Recipe;
use crate::util::{arrs, f64_of, s, u64_of};

type Result<T> = super::Result<T>;

/// What: Decode one recipe object.
///
/// Inputs:
/// - `v`: JSON object from the API
///
/// Output:
/// - `Some(Recipe)` when the object has an `id`; `None` otherwise.
///
/// Details:
/// - Reads camelCase keys (`caloriesPerServing`, `reviewCount`, ...).
/// - Missing or malformed numbers become `0`; missing lists become empty.
/// - Numeric strings are accepted wherever a number is expected.
#[must_use]
pub fn parse_recipe(v: &Value) -> Option<Recipe> {
    let id = u64_of(v, &["id"])?;
    Some(Recipe {
        id,
        name: s(v, "name"),
        image: s(v, "image"),
        rating: f64_of(v, &["rating"]).unwrap_or(0.0),
        review_count: u64_of(v, &["reviewCount"]).unwrap_or(0),
        difficulty: s(v, "difficulty"),
        calories_per_serving: f64_of(v, &["caloriesPerServing"]).unwrap_or(0.0),
        servings: u64_of(v, &["servings"]).unwrap_or(0),
        prep_time_minutes: u64_of(v, &["prepTimeMinutes"]).unwrap_or(0),
        cook_time_minutes: u64_of(v, &["cookTimeMinutes"]).unwrap_or(0),
        cuisine: s(v, "cuisine"),
        ingredients: arrs(v, &["ingredients"]),
        instructions: arrs(v, &["instructions"]),
        tags: arrs(v, &["tags"]),
        meal_type: arrs(v, &["mealType"]),
    })
}

/// What: Decode the recipe list envelope.
///
/// Inputs:
/// - `v`: Response body `{ "recipes": [...] }`
///
/// Output:
/// - Recipes in payload order; entries without an `id` are skipped.
///
/// Details:
/// - A body without a `recipes` array yields an empty list.
#[must_use]
pub fn parse_recipe_list(v: &Value) -> Vec<Recipe> {
    let Some(arr) = v.get("recipes").and_then(Value::as_array) else {
        return Vec::new();
    };
    let list: Vec<Recipe> = arr.iter().filter_map(parse_recipe).collect();
    if list.len() < arr.len() {
        tracing::debug!(skipped = arr.len() - list.len(), "skipped recipes without id");
    }
    list
}

/// What: Fetch the whole recipe list.
///
/// Inputs:
/// - `client`: Shared HTTP client
/// - `settings`: Base URL and page limit
///
/// Output:
/// - `Ok(Vec<Recipe>)` in dataset order.
///
/// # Errors
/// - Returns `Err` on network, HTTP status, or JSON decode failures.
///
/// Details:
/// - Requests `{base}/recipes?limit={fetch_limit}&skip=0` once; a 404 is an empty catalog.
pub async fn fetch_recipes(client: &reqwest::Client, settings: &Settings) -> Result<Vec<Recipe>> {
    let url = format!(
        "{}/recipes?limit={}&skip=0",
        settings.api_base_url, settings.fetch_limit
    );
    let body = super::get_json(client, &url).await?;
    Ok(body.as_ref().map(parse_recipe_list).unwrap_or_default())
}
