use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{AvailableIngredients, Recipe};

use super::graph::IngredientGraph;
use super::scoring::{enhanced_score, matching_count};

/// Default number of greedy suggestions
pub const DEFAULT_TOP_N: usize = 5;

/// A recipe ranked by the greedy strategy
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRecipe<'a> {
    pub recipe: &'a Recipe,
    pub matching_count: usize,
    pub total_ingredients: usize,
    pub score: f64,
}

/// Ranks every recipe sharing at least one ingredient with `available`
///
/// Sorted by descending score. Recipes with equal scores come back in a
/// random order drawn from `rng`; callers must not rely on their order.
pub fn rank_recipes<'a, R>(
    available: &AvailableIngredients,
    recipes: &'a [Recipe],
    graph: &IngredientGraph,
    top_n: usize,
    rng: &mut R,
) -> Vec<RankedRecipe<'a>>
where
    R: Rng + ?Sized,
{
    let mut ranked: Vec<RankedRecipe<'a>> = recipes
        .iter()
        .filter_map(|recipe| {
            let matching = matching_count(recipe, available);
            (matching > 0).then(|| RankedRecipe {
                recipe,
                matching_count: matching,
                total_ingredients: recipe.total_ingredients(),
                score: enhanced_score(available, recipe, graph),
            })
        })
        .collect();

    // Shuffle first so the stable sort leaves ties in random order
    ranked.shuffle(rng);
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pantry_catalog() -> Vec<Recipe> {
        vec![
            Recipe::new("Pancakes", ["flour", "egg", "milk", "sugar"]),
            Recipe::new("Omelette", ["egg", "milk", "cheese"]),
            Recipe::new("Bread", ["flour", "yeast", "water"]),
            Recipe::new("Salad", ["lettuce", "tomato"]),
            Recipe::new("Cheese Toast", ["bread", "cheese"]),
            Recipe::new("Custard", ["egg", "milk", "sugar"]),
            Recipe::new("Flatbread", ["flour", "water"]),
        ]
    }

    #[test]
    fn test_no_matches_returns_empty() {
        let recipes = pantry_catalog();
        let graph = IngredientGraph::build(&recipes);
        let available = AvailableIngredients::new(["saffron"]);
        let mut rng = StdRng::seed_from_u64(7);

        assert!(rank_recipes(&available, &recipes, &graph, 5, &mut rng).is_empty());
    }

    #[test]
    fn test_sorted_descending_and_truncated() {
        let recipes = pantry_catalog();
        let graph = IngredientGraph::build(&recipes);
        let available = AvailableIngredients::new(["egg", "milk", "sugar", "flour"]);
        let mut rng = StdRng::seed_from_u64(7);

        let ranked = rank_recipes(&available, &recipes, &graph, 3, &mut rng);

        assert_eq!(ranked.len(), 3);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(ranked.iter().all(|r| r.matching_count >= 1));
        assert!(ranked
            .iter()
            .all(|r| r.matching_count <= r.total_ingredients));
        assert_eq!(ranked[0].recipe.name, "Pancakes");
        assert_eq!(ranked[0].score, 6.0);
    }

    #[test]
    fn test_ties_contain_both_recipes() {
        let recipes = vec![
            Recipe::new("A", ["x", "y"]),
            Recipe::new("B", ["y", "z"]),
        ];
        let graph = IngredientGraph::build(&recipes);
        let available = AvailableIngredients::new(["y"]);
        let mut rng = StdRng::seed_from_u64(42);

        let ranked = rank_recipes(&available, &recipes, &graph, DEFAULT_TOP_N, &mut rng);

        let names: HashSet<&str> = ranked.iter().map(|r| r.recipe.name.as_str()).collect();
        assert_eq!(names, HashSet::from(["A", "B"]));
        assert!(ranked.iter().all(|r| r.score == 1.5 && r.matching_count == 1));
    }

    #[test]
    fn test_ties_are_not_stably_ordered() {
        let recipes: Vec<Recipe> = (0..6)
            .map(|i| Recipe::new(format!("R{i}"), ["shared", "extra"]))
            .collect();
        let graph = IngredientGraph::build(&recipes);
        let available = AvailableIngredients::new(["shared"]);

        let orders: HashSet<Vec<String>> = (0..20)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                rank_recipes(&available, &recipes, &graph, 6, &mut rng)
                    .iter()
                    .map(|r| r.recipe.name.clone())
                    .collect()
            })
            .collect();

        assert!(orders.len() > 1);
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let recipes = pantry_catalog();
        let graph = IngredientGraph::build(&recipes);
        let available = AvailableIngredients::new(["egg", "flour"]);

        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            rank_recipes(&available, &recipes, &graph, 5, &mut rng)
                .iter()
                .map(|r| r.recipe.name.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(run(3), run(3));
    }
}
