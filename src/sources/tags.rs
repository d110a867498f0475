use serde_json::Value;

use crate::config::Settings;

type Result<T> = super::Result<T>;

/// What: Decode the tag vocabulary.
///
/// Inputs:
/// - `v`: Response body, a flat JSON array of strings
///
/// Output:
/// - Non-empty tags in payload order; non-string entries are dropped.
#[must_use]
pub fn parse_tags(v: &Value) -> Vec<String> {
    v.as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// What: Fetch the tag vocabulary.
///
/// Inputs:
/// - `client`: Shared HTTP client
/// - `settings`: Base URL
///
/// Output:
/// - `Ok(Vec<String>)` of tags.
///
/// # Errors
/// - Returns `Err` on network, HTTP status, or JSON decode failures.
pub async fn fetch_tags(client: &reqwest::Client, settings: &Settings) -> Result<Vec<String>> {
    let url = format!("{}/recipes/tags", settings.api_base_url);
    let body = super::get_json(client, &url).await?;
    Ok(body.as_ref().map(parse_tags).unwrap_or_default())
}
