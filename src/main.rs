//! recipe-book binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use recipe_book::args::{Args, determine_log_level};
use recipe_book::{app, config};

/// Log timestamp formatter in local time.
struct RecipeBookTimer;

impl tracing_subscriber::fmt::time::FormatTime for RecipeBookTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
///
/// Details:
/// - Writes to `<config>/logs/recipe-book.log`; falls back to stderr when the
///   file cannot be opened so startup never blocks on logging.
fn init_logging(level: &str) {
    let mut log_path = config::logs_dir();
    log_path.push("recipe-book.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(RecipeBookTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(RecipeBookTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));

    let settings = config::settings();
    tracing::info!(
        api = %settings.api_base_url,
        location = args.location.as_deref().unwrap_or(""),
        "recipe-book starting"
    );
    if let Err(err) = app::run(&args, &settings).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("recipe-book: {err}");
        std::process::exit(1);
    }
    tracing::info!("recipe-book exited");
}
