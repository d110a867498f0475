//! Settings discovery and parsing.
//!
//! `settings.conf` uses `key = value` lines; see [`settings::parse_settings`]
//! for the accepted keys.

pub mod paths;
pub mod settings;

pub use paths::{config_dir, logs_dir, resolve_settings_path};
pub use settings::{Settings, load_settings_from, parse_settings, settings};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
