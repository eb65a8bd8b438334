use std::collections::{BTreeSet, HashMap};

use crate::models::Recipe;

/// Ingredient to recipe-name adjacency derived from a catalog
///
/// Recipe names per ingredient are a set, so a recipe listing an
/// ingredient twice is recorded once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientGraph {
    edges: HashMap<String, BTreeSet<String>>,
}

impl IngredientGraph {
    /// Builds the graph for the given catalog
    pub fn build(recipes: &[Recipe]) -> Self {
        let mut edges: HashMap<String, BTreeSet<String>> = HashMap::new();

        for recipe in recipes {
            for ingredient in &recipe.ingredients {
                edges
                    .entry(ingredient.clone())
                    .or_default()
                    .insert(recipe.name.clone());
            }
        }

        Self { edges }
    }

    /// Recipe names using an ingredient, in name order
    pub fn recipes_for(&self, ingredient: &str) -> Option<&BTreeSet<String>> {
        self.edges.get(ingredient)
    }

    /// Number of distinct recipes using an ingredient
    pub fn degree(&self, ingredient: &str) -> usize {
        self.edges.get(ingredient).map_or(0, BTreeSet::len)
    }

    /// An ingredient shared by more than one recipe
    pub fn is_hub(&self, ingredient: &str) -> bool {
        self.degree(ingredient) > 1
    }

    pub fn ingredient_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(graph: &IngredientGraph, ingredient: &str) -> Vec<String> {
        graph
            .recipes_for(ingredient)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_empty_catalog() {
        let graph = IngredientGraph::build(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.degree("anything"), 0);
    }

    #[test]
    fn test_two_recipe_graph() {
        let recipes = vec![
            Recipe::new("A", ["x", "y"]),
            Recipe::new("B", ["y", "z"]),
        ];
        let graph = IngredientGraph::build(&recipes);

        assert_eq!(graph.ingredient_count(), 3);
        assert_eq!(names(&graph, "x"), vec!["A"]);
        assert_eq!(names(&graph, "y"), vec!["A", "B"]);
        assert_eq!(names(&graph, "z"), vec!["B"]);
        assert!(graph.is_hub("y"));
        assert!(!graph.is_hub("x"));
    }

    #[test]
    fn test_repeated_ingredient_recorded_once() {
        let recipes = vec![Recipe::new("Eggs", ["egg", "egg"])];
        let graph = IngredientGraph::build(&recipes);

        assert_eq!(graph.degree("egg"), 1);
        assert!(!graph.is_hub("egg"));
    }
}
