use std::fs;
use std::path::Path;

use super::paths::resolve_settings_path;
use crate::logic::Breakpoints;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// User-tunable settings read from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the recipe API, without a trailing slash.
    pub api_base_url: String,
    /// `limit` sent with the recipe list request.
    pub fetch_limit: u32,
    /// Whole-request timeout for API calls, in seconds.
    pub request_timeout_secs: u64,
    /// Connect timeout for API calls, in seconds.
    pub connect_timeout_secs: u64,
    /// Terminal width thresholds between page sizes.
    pub breakpoints: Breakpoints,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://dummyjson.com".to_string(),
            fetch_limit: 100,
            request_timeout_secs: 15,
            connect_timeout_secs: 10,
            breakpoints: Breakpoints::default(),
        }
    }
}

/// What: Load settings from the user's config directory.
///
/// Inputs: none
///
/// Output:
/// - Parsed settings; `Settings::default()` when the file is missing or unreadable.
pub fn settings() -> Settings {
    let Some(path) = resolve_settings_path() else {
        tracing::debug!("no settings.conf found; using defaults");
        return Settings::default();
    };
    load_settings_from(&path)
}

/// What: Load settings from an explicit file.
///
/// Inputs:
/// - `path`: Settings file
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "settings loaded");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}

/// What: Parse settings file content.
///
/// Inputs:
/// - `content`: Whole file text
///
/// Output:
/// - Settings with recognised keys applied over the defaults.
///
/// Details:
/// - Values that fail to parse keep the default and are logged.
/// - Unknown keys are ignored.
/// - A trailing `/` on `api_base_url` is removed.
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "api_base_url" | "api_url" | "base_url" => {
                let url = val.trim_end_matches('/');
                if url.starts_with("http://") || url.starts_with("https://") {
                    out.api_base_url = url.to_string();
                } else {
                    tracing::warn!(value = %val, "api_base_url must start with http:// or https://");
                }
            }
            "fetch_limit" => apply_parsed(&key, &val, &mut out.fetch_limit),
            "request_timeout_secs" | "timeout_secs" => {
                apply_parsed(&key, &val, &mut out.request_timeout_secs);
            }
            "connect_timeout_secs" => apply_parsed(&key, &val, &mut out.connect_timeout_secs),
            "breakpoint_wide" => apply_parsed(&key, &val, &mut out.breakpoints.wide),
            "breakpoint_medium" => apply_parsed(&key, &val, &mut out.breakpoints.medium),
            _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
        }
    }
    if out.breakpoints.medium > out.breakpoints.wide {
        tracing::warn!(
            medium = out.breakpoints.medium,
            wide = out.breakpoints.wide,
            "breakpoint_medium exceeds breakpoint_wide; using defaults"
        );
        out.breakpoints = Breakpoints::default();
    }
    out
}

/// Parse `val` into `slot`, logging and keeping the old value on failure.
fn apply_parsed<T: std::str::FromStr>(key: &str, val: &str, slot: &mut T) {
    match val.parse::<T>() {
        Ok(v) => *slot = v,
        Err(_) => tracing::warn!(key = %key, value = %val, "invalid settings value; keeping default"),
    }
}
