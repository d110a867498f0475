//! Core value types used by the recipe catalog state.

use serde::Serialize;

/// One recipe record as served by the catalog API.
///
/// Records are immutable once fetched. Numeric fields that were missing or
/// malformed in the payload are stored as `0`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Catalog identifier, also used by the detail endpoint.
    pub id: u64,
    /// Display name; the free-text search matches against this.
    pub name: String,
    /// Image URL.
    pub image: String,
    /// Average rating (0.0-5.0 in practice).
    pub rating: f64,
    /// Number of reviews behind `rating`.
    pub review_count: u64,
    /// Difficulty label, normally `Easy`, `Medium` or `Hard`.
    pub difficulty: String,
    /// Calories per serving.
    pub calories_per_serving: f64,
    /// Number of servings the recipe yields.
    pub servings: u64,
    /// Preparation time in minutes.
    pub prep_time_minutes: u64,
    /// Cooking time in minutes.
    pub cook_time_minutes: u64,
    /// Cuisine label (e.g. "Italian").
    pub cuisine: String,
    /// Ingredient lines in recipe order.
    pub ingredients: Vec<String>,
    /// Instruction steps in recipe order.
    pub instructions: Vec<String>,
    /// Free-form tags; matched case-insensitively by the tag filter.
    pub tags: Vec<String>,
    /// Meal types (e.g. "Dinner").
    pub meal_type: Vec<String>,
}

impl Recipe {
    /// What: Map the difficulty label to a sortable rank.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - `1` for `Easy`, `2` for `Medium`, `3` for `Hard`, `0` for anything else.
    ///
    /// Details:
    /// - Labels are compared exactly; unknown or empty labels never fail.
    #[must_use]
    pub fn difficulty_rank(&self) -> u8 {
        match self.difficulty.as_str() {
            "Easy" => 1,
            "Medium" => 2,
            "Hard" => 3,
            _ => 0,
        }
    }

    /// Preparation plus cooking time.
    #[must_use]
    pub const fn total_time_minutes(&self) -> u64 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }

    /// Rating rendered with one decimal, e.g. `4.6`.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }

    /// What: Check whether any of this recipe's tags equals `tag`, ignoring case.
    ///
    /// Inputs:
    /// - `tag_lower`: Tag already lower-cased by the caller.
    ///
    /// Output:
    /// - `true` when at least one tag matches.
    #[must_use]
    pub fn has_tag_lower(&self, tag_lower: &str) -> bool {
        self.tags.iter().any(|t| t.to_lowercase() == tag_lower)
    }
}

/// Field the result list is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Keep dataset order.
    #[default]
    None,
    /// Order by `rating`.
    Rating,
    /// Order by `calories_per_serving`.
    CaloriesPerServing,
    /// Order by difficulty rank (Easy < Medium < Hard, unknown first).
    Difficulty,
}

impl SortField {
    /// All fields in menu order.
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::Rating,
        Self::CaloriesPerServing,
        Self::Difficulty,
    ];

    /// Human-facing label shown in the sort menu.
    ///
    /// Inputs: none
    ///
    /// Output: Static label string.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Default",
            Self::Rating => "Rating",
            Self::CaloriesPerServing => "Calories",
            Self::Difficulty => "Difficulty",
        }
    }

    /// Parse a sort field from its key or a menu alias.
    ///
    /// Inputs: `s` key string (case-insensitive).
    ///
    /// Output: `Some(SortField)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "default" => Some(Self::None),
            "rating" => Some(Self::Rating),
            "calories" | "caloriesperserving" | "calories_per_serving" => {
                Some(Self::CaloriesPerServing)
            }
            "difficulty" => Some(Self::Difficulty),
            _ => None,
        }
    }

    /// What: Comparable key of `recipe` for this field.
    ///
    /// Inputs:
    /// - `recipe`: Record to read from.
    ///
    /// Output:
    /// - Numeric key; `0.0` for [`SortField::None`].
    #[must_use]
    pub fn key_of(self, recipe: &Recipe) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Rating => recipe.rating,
            Self::CaloriesPerServing => recipe.calories_per_serving,
            Self::Difficulty => f64::from(recipe.difficulty_rank()),
        }
    }
}

/// Direction applied to the active [`SortField`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    /// Lower values first.
    #[default]
    Ascending,
    /// Higher values first.
    Descending,
}

impl SortDirection {
    /// The other direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Short label used in the status line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }
}

/// One entry of the compact page-number strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PageItem {
    /// A clickable page number (1-based).
    Page {
        /// Page number.
        number: usize,
    },
    /// Gap marker rendered as `...`.
    Ellipsis,
}

/// Progress of the one-shot catalog load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch still in flight (or never finished).
    #[default]
    Loading,
    /// Recipes are in memory.
    Ready,
    /// The fetch failed; the message has already been logged.
    Failed(String),
}

/// State of the recipe detail view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
    /// Fetch in flight.
    #[default]
    Loading,
    /// No such recipe, or the fetch failed.
    NotFound,
    /// The full record.
    Loaded(Box<Recipe>),
}
