//! Command-line argument definition.

use clap::Parser;

/// recipe-book - browse, filter and sort a recipe catalog from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "recipe-book")]
#[command(version)]
#[command(about = "Browse, filter and sort a recipe catalog from the terminal", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Initial location query string (e.g. "?q=pasta&tag=Italian&page=2")
    pub location: Option<String>,

    /// Show the detail view for one recipe and exit
    #[arg(long, value_name = "ID")]
    pub recipe: Option<u64>,

    /// Viewport width in columns (default: the terminal width)
    #[arg(long, value_name = "N")]
    pub width: Option<u16>,

    /// Render the home view once and exit
    #[arg(long)]
    pub once: bool,

    /// Print the view as JSON (use with --once or --recipe)
    #[arg(long)]
    pub json: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}
