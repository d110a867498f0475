//! Shared utilities for argument processing.

use crate::location::Location;

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
/// - `RECIPE_BOOK_TRACE=1` enables TRACE level.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else if std::env::var("RECIPE_BOOK_TRACE").ok().as_deref() == Some("1") {
        "trace".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Location the session starts from.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Parsed location; empty when no positional location was given.
#[must_use]
pub fn initial_location(args: &crate::args::Args) -> Location {
    args.location
        .as_deref()
        .map(Location::parse)
        .unwrap_or_default()
}
