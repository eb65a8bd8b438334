use std::collections::{BTreeMap, HashSet};

use crate::models::{AvailableIngredients, Recipe};

/// Recipe ingredients missing from `available`
///
/// Listed in recipe order without repeats.
pub fn gap_analysis(recipe: &Recipe, available: &AvailableIngredients) -> Vec<String> {
    let mut seen = HashSet::new();
    recipe
        .ingredients
        .iter()
        .filter(|ingredient| !available.contains(ingredient))
        .filter(|ingredient| seen.insert(*ingredient))
        .cloned()
        .collect()
}

/// Substitutes the recipe registers for any of the `missing` ingredients
///
/// Missing ingredients without a registered substitute are left out.
pub fn substitution_recommendations(
    missing: &[String],
    recipe: &Recipe,
) -> BTreeMap<String, String> {
    missing
        .iter()
        .filter_map(|ingredient| {
            recipe
                .substitutions
                .get(ingredient)
                .map(|substitute| (ingredient.clone(), substitute.clone()))
        })
        .collect()
}
