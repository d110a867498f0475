//! Recipe API client split into submodules.
//!
//! The API is read-only: one request for the recipe list, one for the tag
//! vocabulary, and one per opened recipe. Nothing is cached or retried.

use std::time::Duration;

use serde_json::Value;

use crate::config::Settings;

mod details;
mod recipes;
mod tags;
#[cfg(test)]
pub mod test_server;

/// Result type alias for API fetch operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use details::{fetch_recipe, load_detail};
pub use recipes::{fetch_recipes, parse_recipe, parse_recipe_list};
pub use tags::{fetch_tags, parse_tags};

/// What: Build the HTTP client used for every API call.
///
/// Inputs:
/// - `settings`: Supplies connect and request timeouts
///
/// Output:
/// - Configured `reqwest::Client`; falls back to a default client if the builder fails.
///
/// Details:
/// - Connection pooling is enabled by default in `reqwest::Client`, so one
///   client is shared for the whole session.
#[must_use]
pub fn build_client(settings: &Settings) -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .user_agent(format!("recipe-book/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to build HTTP client; using defaults");
            reqwest::Client::new()
        })
}

/// What: GET a URL and decode the JSON body.
///
/// Inputs:
/// - `client`: Shared HTTP client
/// - `url`: Absolute URL
///
/// Output:
/// - `Ok(Some(Value))` on success; `Ok(None)` on HTTP 404; `Err` on any other failure.
///
/// # Errors
/// - Returns `Err` when the request fails, the status is not 2xx/404, or the body is not JSON.
async fn get_json(client: &reqwest::Client, url: &str) -> Result<Option<Value>> {
    tracing::debug!(url = %url, "GET");
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        tracing::debug!(url = %url, "not found");
        return Ok(None);
    }
    if !status.is_success() {
        return Err(format!("HTTP {status} from {url}").into());
    }
    let body = resp.text().await?;
    let v: Value = serde_json::from_str(&body)?;
    Ok(Some(v))
}
