//! Shared recipe fixtures for the catalog integration tests.

use recipe_book::state::Recipe;

/// What: Build a recipe with the fields the engine reads.
///
/// Inputs:
/// - `id`, `name`, `rating`, `calories`, `difficulty`, `tags`
///
/// Output:
/// - `Recipe` with everything else defaulted.
pub fn recipe(
    id: u64,
    name: &str,
    rating: f64,
    calories: f64,
    difficulty: &str,
    tags: &[&str],
) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        rating,
        calories_per_serving: calories,
        difficulty: difficulty.to_string(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        ..Default::default()
    }
}

/// Small catalog in dataset order with mixed-case tags and a tie on rating.
pub fn catalog() -> Vec<Recipe> {
    vec![
        recipe(1, "Classic Margherita Pizza", 4.6, 300.0, "Easy", &["Pizza", "Italian"]),
        recipe(2, "Vegetarian Stir-Fry", 4.7, 250.0, "Medium", &["Vegetarian", "Asian"]),
        recipe(3, "Chocolate Chip Cookies", 4.9, 150.0, "Easy", &["Cookies", "Dessert"]),
        recipe(4, "Chicken Alfredo Pasta", 4.6, 500.0, "Medium", &["pasta", "italian"]),
        recipe(5, "Mango Salsa Chicken", 4.9, 380.0, "Hard", &["Chicken", "Mexican"]),
        recipe(6, "Quinoa Salad", 4.4, 220.0, "Easy", &["Salad", "Vegetarian"]),
        recipe(7, "Tomato Basil Bruschetta", 4.7, 120.0, "Unknown", &["Italian", "Appetizer"]),
    ]
}

/// `n` numbered recipes, alternating `Even`/`Odd` tags.
pub fn numbered(n: u64) -> Vec<Recipe> {
    (1..=n)
        .map(|id| {
            let tag = if id % 2 == 0 { "Even" } else { "Odd" };
            recipe(id, &format!("Recipe {id}"), 4.0, 100.0, "Easy", &[tag])
        })
        .collect()
}

/// Ids of a recipe slice, for compact assertions.
pub fn ids(recipes: &[&Recipe]) -> Vec<u64> {
    recipes.iter().map(|r| r.id).collect()
}
