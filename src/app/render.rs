//! Plain-text rendering of the home, tag and detail views.

use std::fmt::Write as _;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::location::Location;
use crate::logic::{CatalogView, PaginationControls};
use crate::state::{DetailState, LoadState, PageItem, Recipe, SortField};
use crate::sync::Session;
use crate::util::truncate_to_width;

/// Columns used by everything on a recipe row except the name.
const FIXED_ROW_COLUMNS: usize = 32;

/// Pad `text` with spaces up to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

/// What: One result row.
///
/// Inputs:
/// - `recipe`: Record to show
/// - `name_width`: Columns reserved for the name
///
/// Output:
/// - `id  name  rating  difficulty  calories` without a trailing newline.
fn recipe_row(recipe: &Recipe, name_width: usize) -> String {
    let name = pad(&truncate_to_width(&recipe.name, name_width), name_width);
    let difficulty = if recipe.difficulty.is_empty() {
        "-"
    } else {
        recipe.difficulty.as_str()
    };
    let calories = format!("{:.0}", recipe.calories_per_serving);
    format!(
        "{:>4}  {name}  {:>4}  {difficulty:<6}  {calories:>5} kcal",
        recipe.id,
        recipe.rating_label(),
    )
}

/// What: Format the page-number strip and the enabled jump controls.
///
/// Inputs:
/// - `controls`: Pagination controls for the current result set
///
/// Output:
/// - e.g. `<< < 1 ... 4 [5] 6 ... 10 > >>`; disabled controls are left out.
#[must_use]
pub fn pagination_line(controls: &PaginationControls) -> String {
    let mut parts: Vec<String> = Vec::new();
    if controls.first.is_some() {
        parts.push("<<".to_string());
    }
    if controls.prev.is_some() {
        parts.push("<".to_string());
    }
    for item in &controls.items {
        parts.push(match item {
            PageItem::Page { number } if *number == controls.current => format!("[{number}]"),
            PageItem::Page { number } => number.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        });
    }
    if controls.next.is_some() {
        parts.push(">".to_string());
    }
    if controls.last.is_some() {
        parts.push(">>".to_string());
    }
    parts.join(" ")
}

/// What: Summary line under the results.
///
/// Inputs:
/// - `session`: Current session
///
/// Output:
/// - Result count, page position, sort and the location.
#[must_use]
pub fn status_line(session: &Session) -> String {
    let view = session.view();
    let query = session.query();
    let sort = if query.sort_field == SortField::None {
        SortField::None.label().to_string()
    } else {
        format!(
            "{} ({})",
            query.sort_field.label(),
            query.sort_direction.label()
        )
    };
    format!(
        "{} found | page {}/{} | {} per page | sort: {sort} | {}",
        view.filtered_count,
        query.current_page,
        view.total_pages.max(1),
        query.page_size,
        session.location()
    )
}

/// What: Render the home view.
///
/// Inputs:
/// - `session`: Current session
/// - `width`: Viewport width used to size the name column
///
/// Output:
/// - Multi-line text ending with the status line.
///
/// Details:
/// - While loading (or after a failed load) only the loading notice is shown.
/// - An empty page shows "No recipes found" and no pagination strip.
#[must_use]
pub fn render_home(session: &Session, width: u16) -> String {
    let mut out = String::new();
    match session.load_state() {
        LoadState::Loading | LoadState::Failed(_) => {
            out.push_str("Loading recipes...\n");
            return out;
        }
        LoadState::Ready => {}
    }
    let query = session.query();
    if !query.query.is_empty() {
        let _ = writeln!(out, "Search: {}", query.query);
    }
    if !query.selected_tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", query.selected_tags.join(", "));
    }
    let view: CatalogView<'_> = session.view();
    if view.visible.is_empty() {
        out.push_str("No recipes found\n");
    } else {
        let name_width = usize::from(width)
            .saturating_sub(FIXED_ROW_COLUMNS)
            .clamp(12, 48);
        for recipe in &view.visible {
            out.push_str(&recipe_row(recipe, name_width));
            out.push('\n');
        }
        if let Some(controls) = session.pagination() {
            out.push_str(&pagination_line(&controls));
            out.push('\n');
        }
    }
    out.push_str(&status_line(session));
    out.push('\n');
    out
}

/// What: Render the tag vocabulary with the current selection marked.
///
/// Inputs:
/// - `session`: Current session
///
/// Output:
/// - One `[x] tag` / `[ ] tag` line per tag, or a notice when none loaded.
#[must_use]
pub fn render_tags(session: &Session) -> String {
    if session.tags().is_empty() {
        return "No tags available\n".to_string();
    }
    let query = session.query();
    session
        .tags()
        .iter()
        .map(|t| {
            let mark = if query.is_tag_selected(t) { 'x' } else { ' ' };
            format!("[{mark}] {t}\n")
        })
        .collect()
}

/// What: Render the recipe detail view.
///
/// Inputs:
/// - `detail`: Loading, not-found, or loaded state
///
/// Output:
/// - Multi-line text.
#[must_use]
pub fn render_detail(detail: &DetailState) -> String {
    let recipe = match detail {
        DetailState::Loading => return "Loading recipe...\n".to_string(),
        DetailState::NotFound => return "Recipe not found\n".to_string(),
        DetailState::Loaded(recipe) => recipe,
    };
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", recipe.name, recipe.id);
    if !recipe.cuisine.is_empty() {
        let _ = writeln!(out, "Cuisine: {}", recipe.cuisine);
    }
    let _ = writeln!(
        out,
        "Rating: {} ({} reviews) | Difficulty: {}",
        recipe.rating_label(),
        recipe.review_count,
        if recipe.difficulty.is_empty() {
            "-"
        } else {
            recipe.difficulty.as_str()
        }
    );
    let _ = writeln!(
        out,
        "Prep: {} min | Cook: {} min | Total: {} min",
        recipe.prep_time_minutes,
        recipe.cook_time_minutes,
        recipe.total_time_minutes()
    );
    let _ = writeln!(
        out,
        "Servings: {} | Calories per serving: {:.0}",
        recipe.servings, recipe.calories_per_serving
    );
    if !recipe.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", recipe.tags.join(", "));
    }
    if !recipe.meal_type.is_empty() {
        let _ = writeln!(out, "Meal: {}", recipe.meal_type.join(", "));
    }
    if !recipe.ingredients.is_empty() {
        out.push_str("\nIngredients:\n");
        for item in &recipe.ingredients {
            let _ = writeln!(out, "  - {item}");
        }
    }
    if !recipe.instructions.is_empty() {
        out.push_str("\nInstructions:\n");
        for (i, step) in recipe.instructions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {step}", i + 1);
        }
    }
    out
}

/// Machine-readable snapshot of the home view.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HomeSnapshot<'a> {
    /// Visible page, filtered count and total pages.
    #[serde(flatten)]
    view: CatalogView<'a>,
    /// Current page.
    current_page: usize,
    /// Page size in effect.
    page_size: usize,
    /// Pagination controls, absent for a single page.
    pagination: Option<PaginationControls>,
    /// Serialized location.
    location: String,
}

/// What: Render the home view as pretty JSON.
///
/// Inputs:
/// - `session`: Current session
///
/// Output:
/// - JSON text.
///
/// # Errors
/// - Returns `Err` if serialization fails.
pub fn render_home_json(session: &Session) -> serde_json::Result<String> {
    let location: &Location = session.location();
    let snapshot = HomeSnapshot {
        view: session.view(),
        current_page: session.query().current_page,
        page_size: session.query().page_size,
        pagination: session.pagination(),
        location: location.to_string(),
    };
    serde_json::to_string_pretty(&snapshot)
}

/// What: Render the detail view as pretty JSON.
///
/// Inputs:
/// - `detail`: Detail state
///
/// Output:
/// - The recipe object, or `null` when it was not found.
///
/// # Errors
/// - Returns `Err` if serialization fails.
pub fn render_detail_json(detail: &DetailState) -> serde_json::Result<String> {
    let recipe: Option<&Recipe> = match detail {
        DetailState::Loaded(recipe) => Some(recipe.as_ref()),
        DetailState::Loading | DetailState::NotFound => None,
    };
    serde_json::to_string_pretty(&recipe)
}
