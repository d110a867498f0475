use std::io::{BufRead, Write};

use tokio::sync::mpsc;

use crate::args::{Args, initial_location};
use crate::config::Settings;
use crate::sources::{build_client, fetch_recipes, fetch_tags, load_detail};
use crate::sync::{Action, Session};

use super::commands::{Command, HELP, parse_command};
use super::render::{render_detail, render_detail_json, render_home, render_home_json, render_tags};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Width assumed when the terminal size cannot be read (e.g. piped output).
const FALLBACK_WIDTH: u16 = 120;

/// Current terminal width, or [`FALLBACK_WIDTH`].
fn terminal_width() -> u16 {
    crossterm::terminal::size().map_or(FALLBACK_WIDTH, |(w, _)| w)
}

/// What: Run recipe-book end-to-end.
///
/// Inputs:
/// - `args`: Parsed command line
/// - `settings`: Loaded settings
///
/// Output:
/// - `Ok(())` on a clean exit; `Err` only on stdout or serialization failures.
///
/// Details:
/// - `--recipe` fetches and prints one recipe, then returns.
/// - Otherwise the recipe list and tags are fetched concurrently, the session
///   is built from the initial location, and either rendered once (`--once`)
///   or handed to the interactive loop.
pub async fn run(args: &Args, settings: &Settings) -> Result<()> {
    let client = build_client(settings);

    if let Some(id) = args.recipe {
        let detail = load_detail(&client, settings, id).await;
        let text = if args.json {
            render_detail_json(&detail)? + "\n"
        } else {
            render_detail(&detail)
        };
        print!("{text}");
        return Ok(());
    }

    let width = args.width.unwrap_or_else(terminal_width);
    let mut session = Session::new(initial_location(args), width, settings.breakpoints);
    tracing::info!(location = %session.location(), width, "session started");

    let (recipes, tags) = tokio::join!(
        fetch_recipes(&client, settings),
        fetch_tags(&client, settings)
    );
    session.finish_load(recipes, tags);

    if args.once {
        let text = if args.json {
            render_home_json(&session)? + "\n"
        } else {
            render_home(&session, width)
        };
        print!("{text}");
        return Ok(());
    }

    event_loop(session, &client, settings, args.width).await
}

/// What: Forward stdin lines into a channel from a dedicated thread.
///
/// Inputs:
/// - `tx`: Sender the lines are pushed into
///
/// Details:
/// - The thread ends at EOF, on a read error, or when the receiver is dropped.
fn spawn_input_thread(tx: mpsc::UnboundedSender<String>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
}

/// Print the prompt without a newline.
fn prompt() -> Result<()> {
    let mut out = std::io::stdout();
    out.write_all(b"> ")?;
    out.flush()?;
    Ok(())
}

/// What: Interactive command loop.
///
/// Inputs:
/// - `session`: Loaded session
/// - `client`: Shared HTTP client for detail fetches
/// - `settings`: Base URL for detail fetches
/// - `fixed_width`: Width pinned on the command line, if any
///
/// Output:
/// - `Ok(())` on `quit` or end of input.
///
/// Details:
/// - Before each command the terminal width is sampled; a change is applied
///   as `Action::Resize` ahead of the command itself.
/// - The home view is reprinted after every command that touched the state.
async fn event_loop(
    mut session: Session,
    client: &reqwest::Client,
    settings: &Settings,
    fixed_width: Option<u16>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    spawn_input_thread(tx);

    let mut width = fixed_width.unwrap_or_else(terminal_width);
    print!("{}", render_home(&session, width));
    println!("Type `help` for commands.");
    prompt()?;

    while let Some(line) = rx.recv().await {
        if fixed_width.is_none() {
            let now = terminal_width();
            if now != width {
                width = now;
                session.apply(Action::Resize(width));
            }
        }
        match parse_command(&line) {
            Command::Quit => break,
            Command::Dispatch(actions) => {
                for action in actions {
                    session.apply(action);
                }
                print!("{}", render_home(&session, width));
            }
            Command::Empty => print!("{}", render_home(&session, width)),
            Command::ShowTags => print!("{}", render_tags(&session)),
            Command::Open(id) => {
                tracing::info!(id, "opening recipe");
                let detail = load_detail(client, settings, id).await;
                print!("{}", render_detail(&detail));
            }
            Command::Help => println!("{HELP}"),
            Command::Invalid(msg) => println!("{msg}"),
        }
        prompt()?;
    }
    tracing::info!(location = %session.location(), "session ended");
    Ok(())
}
