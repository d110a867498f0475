//! recipe-book command-line host.
//!
//! Fetches the catalog, then either renders a single view or runs a
//! line-oriented loop that maps commands onto session actions.

/// Line command parsing.
pub mod commands;
/// Plain-text and JSON rendering.
pub mod render;
/// Startup and the interactive loop.
mod runtime;

pub use runtime::run;
