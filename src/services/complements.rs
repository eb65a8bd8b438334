use std::collections::HashMap;

use crate::models::{AvailableIngredients, Recipe};

use super::graph::IngredientGraph;

/// Default number of complementary ingredients
pub const DEFAULT_COMPLEMENT_TOP_N: usize = 3;

/// Ingredients worth adding to unlock more recipes
///
/// Every available ingredient votes for the missing ingredients of each
/// recipe it appears in, so an ingredient reachable along several paths
/// collects several votes. Highest vote count first; ties keep the order in
/// which ingredients were first encountered.
pub fn suggest_complementary_ingredients(
    available: &AvailableIngredients,
    graph: &IngredientGraph,
    recipes: &[Recipe],
    top_n: usize,
) -> Vec<String> {
    let mut by_name: HashMap<&str, &Recipe> = HashMap::new();
    for recipe in recipes {
        by_name.entry(recipe.name.as_str()).or_insert(recipe);
    }

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for ingredient in available.iter() {
        let Some(connected) = graph.recipes_for(ingredient) else {
            continue;
        };

        for recipe_name in connected {
            let Some(recipe) = by_name.get(recipe_name.as_str()) else {
                continue;
            };

            for other in &recipe.ingredients {
                if available.contains(other) {
                    continue;
                }
                match positions.get(other.as_str()) {
                    Some(&position) => counts[position].1 += 1,
                    None => {
                        positions.insert(other.as_str(), counts.len());
                        counts.push((other.as_str(), 1));
                    }
                }
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(top_n)
        .map(|(ingredient, _)| ingredient.to_string())
        .collect()
}
