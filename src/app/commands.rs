//! Line commands accepted by the interactive loop.

use crate::location::Location;
use crate::state::SortField;
use crate::sync::Action;

/// Parsed form of one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// State changes to dispatch in order.
    Dispatch(Vec<Action>),
    /// Print the tag vocabulary.
    ShowTags,
    /// Open the detail view for a recipe id.
    Open(u64),
    /// Print the command reference.
    Help,
    /// Leave the loop.
    Quit,
    /// Blank line; redraw only.
    Empty,
    /// Unusable input, with a message for the user.
    Invalid(String),
}

/// Command reference printed by `help`.
pub const HELP: &str = "\
Commands:
  search <text>    filter by name (empty text clears the query)
  clear            clear the search
  tag <name>       toggle a tag filter
  tags             list available tags
  reset            clear all tag filters
  sort <field>     none | rating | calories | difficulty
  order            toggle ascending/descending
  page <n>         jump to page n
  first, prev, next, last
  go <location>    load a location such as ?q=pizza&tag=Italian
  open <id>        show one recipe
  help             this text
  quit             exit";

/// What: Parse one input line.
///
/// Inputs:
/// - `line`: Raw line from stdin
///
/// Output:
/// - The matching `Command`; never fails.
///
/// Details:
/// - The command word is case-insensitive; the argument keeps its case.
/// - `search <text>` edits the search box and submits it in one step.
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    let (word, rest) = trimmed
        .split_once(char::is_whitespace)
        .map_or((trimmed, ""), |(w, r)| (w, r.trim()));
    let one = |a: Action| Command::Dispatch(vec![a]);
    match word.to_lowercase().as_str() {
        "search" | "s" | "/" => Command::Dispatch(vec![
            Action::EditSearch(rest.to_string()),
            Action::SubmitSearch,
        ]),
        "clear" => one(Action::ClearSearch),
        "tag" | "t" => {
            if rest.is_empty() {
                Command::Invalid("usage: tag <name>".to_string())
            } else {
                one(Action::ToggleTag(rest.to_string()))
            }
        }
        "tags" => Command::ShowTags,
        "reset" => one(Action::ClearTags),
        "sort" => SortField::from_key(rest).map_or_else(
            || Command::Invalid(format!("unknown sort field: {rest}")),
            |field| one(Action::SetSort(field)),
        ),
        "order" | "reverse" => one(Action::ToggleSortDirection),
        "page" | "p" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 => one(Action::GoToPage(n)),
            _ => Command::Invalid(format!("not a page number: {rest}")),
        },
        "first" => one(Action::FirstPage),
        "prev" => one(Action::PrevPage),
        "next" | "n" => one(Action::NextPage),
        "last" => one(Action::LastPage),
        "go" => one(Action::Navigate(Location::parse(rest))),
        "open" | "o" => rest.parse::<u64>().map_or_else(
            |_| Command::Invalid(format!("not a recipe id: {rest}")),
            Command::Open,
        ),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Invalid(format!("unknown command: {other} (try `help`)")),
    }
}
