use crate::config::Settings;
use crate::state::{DetailState, Recipe};

type Result<T> = super::Result<T>;

/// What: Fetch one full recipe by id.
///
/// Inputs:
/// - `client`: Shared HTTP client
/// - `settings`: Base URL
/// - `id`: Recipe identifier
///
/// Output:
/// - `Ok(Some(Recipe))` when found; `Ok(None)` on 404 or a body without an id.
///
/// # Errors
/// - Returns `Err` on network, HTTP status, or JSON decode failures.
pub async fn fetch_recipe(
    client: &reqwest::Client,
    settings: &Settings,
    id: u64,
) -> Result<Option<Recipe>> {
    let url = format!("{}/recipes/{id}", settings.api_base_url);
    let body = super::get_json(client, &url).await?;
    Ok(body.as_ref().and_then(super::parse_recipe))
}

/// What: Load the detail view for a recipe.
///
/// Inputs:
/// - `client`: Shared HTTP client
/// - `settings`: Base URL
/// - `id`: Recipe identifier
///
/// Output:
/// - `DetailState::Loaded` on success; `DetailState::NotFound` otherwise.
///
/// Details:
/// - Fetch errors are logged here and never reach the caller.
pub async fn load_detail(client: &reqwest::Client, settings: &Settings, id: u64) -> DetailState {
    match fetch_recipe(client, settings, id).await {
        Ok(Some(recipe)) => DetailState::Loaded(Box::new(recipe)),
        Ok(None) => {
            tracing::info!(id, "recipe not found");
            DetailState::NotFound
        }
        Err(e) => {
            tracing::warn!(id, error = %e, "failed to fetch recipe");
            DetailState::NotFound
        }
    }
}
