use crate::models::{AvailableIngredients, Recipe};

use super::graph::IngredientGraph;

/// Bonus per matched ingredient that other recipes also use
pub const HUB_BONUS: f64 = 0.5;

/// Distinct recipe ingredients present in `available`
pub fn matching_count(recipe: &Recipe, available: &AvailableIngredients) -> usize {
    recipe
        .ingredient_set()
        .into_iter()
        .filter(|ingredient| available.contains(ingredient))
        .count()
}

/// Graph-enhanced relevance of a recipe
///
/// `matching + 0.5 * hubs`, where hubs counts the recipe's ingredient entries
/// that are available and shared with at least one other recipe. Repeated
/// entries in the recipe's list each earn the bonus.
pub fn enhanced_score(
    available: &AvailableIngredients,
    recipe: &Recipe,
    graph: &IngredientGraph,
) -> f64 {
    let base = matching_count(recipe, available);
    let connection_bonus = recipe
        .ingredients
        .iter()
        .filter(|ingredient| available.contains(ingredient) && graph.is_hub(ingredient))
        .count();

    base as f64 + connection_bonus as f64 * HUB_BONUS
}
