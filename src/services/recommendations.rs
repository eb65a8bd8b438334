use rand::Rng;

use crate::models::{
    AvailableIngredients, Recipe, RecipeSuggestion, SuggestionMode, SuggestionRequest,
    SuggestionResponse,
};

use super::combination::{find_exact_cover, CoverOutcome, DEFAULT_NODE_LIMIT};
use super::complements::{suggest_complementary_ingredients, DEFAULT_COMPLEMENT_TOP_N};
use super::gaps::{gap_analysis, substitution_recommendations};
use super::graph::IngredientGraph;
use super::ranking::{rank_recipes, DEFAULT_TOP_N};
use super::scoring::matching_count;

/// Tunables for the recommendation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Maximum greedy suggestions
    pub suggestion_limit: usize,
    /// Maximum complementary ingredients
    pub complement_limit: usize,
    /// Search-tree nodes the exact cover search may visit
    pub cover_search_node_limit: Option<usize>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_TOP_N,
            complement_limit: DEFAULT_COMPLEMENT_TOP_N,
            cover_search_node_limit: Some(DEFAULT_NODE_LIMIT),
        }
    }
}

/// Produces recipe suggestions over a read-only catalog
///
/// Every call builds its own ingredient graph, so one engine can serve
/// concurrent requests without coordination.
pub struct RecommendationEngine<'a> {
    recipes: &'a [Recipe],
    settings: EngineSettings,
}

impl<'a> RecommendationEngine<'a> {
    /// Creates a new engine over the given catalog
    pub fn new(recipes: &'a [Recipe], settings: EngineSettings) -> Self {
        Self { recipes, settings }
    }

    /// Suggests recipes, breaking score ties with the thread-local RNG
    pub fn suggest(&self, request: &SuggestionRequest) -> SuggestionResponse {
        self.suggest_with_rng(request, &mut rand::thread_rng())
    }

    /// Suggests recipes, breaking score ties with `rng`
    ///
    /// When backtracking is requested and an exact cover exists, the cover is
    /// returned in combo mode. Otherwise, including when the cover search
    /// fails, the greedy ranking is returned.
    pub fn suggest_with_rng<R>(&self, request: &SuggestionRequest, rng: &mut R) -> SuggestionResponse
    where
        R: Rng + ?Sized,
    {
        let available = AvailableIngredients::new(request.ingredients.iter().cloned());
        let graph = IngredientGraph::build(self.recipes);

        let complementary_ingredients = suggest_complementary_ingredients(
            &available,
            &graph,
            self.recipes,
            self.settings.complement_limit,
        );

        if request.use_backtracking {
            if let Some(combo) = self.exact_cover(&available) {
                tracing::debug!(recipes = combo.len(), "Exact cover found");

                let suggestions = combo
                    .into_iter()
                    .map(|recipe| {
                        build_suggestion(recipe, &available, matching_count(recipe, &available), None)
                    })
                    .collect();

                return SuggestionResponse {
                    suggestions,
                    mode: SuggestionMode::BacktrackingCombo,
                    complementary_ingredients,
                };
            }

            tracing::debug!("No exact cover, falling back to greedy ranking");
        }

        let suggestions: Vec<RecipeSuggestion> = rank_recipes(
            &available,
            self.recipes,
            &graph,
            self.settings.suggestion_limit,
            rng,
        )
        .into_iter()
        .map(|ranked| {
            build_suggestion(ranked.recipe, &available, ranked.matching_count, Some(ranked.score))
        })
        .collect();

        tracing::debug!(
            available = available.len(),
            suggestions = suggestions.len(),
            "Greedy ranking completed"
        );

        SuggestionResponse {
            suggestions,
            mode: SuggestionMode::Greedy,
            complementary_ingredients,
        }
    }

    fn exact_cover(&self, available: &AvailableIngredients) -> Option<Vec<&'a Recipe>> {
        match find_exact_cover(available, self.recipes, self.settings.cover_search_node_limit) {
            CoverOutcome::Found(recipes) => Some(recipes),
            CoverOutcome::NotFound => None,
            CoverOutcome::LimitReached { visited } => {
                tracing::warn!(
                    visited,
                    catalog_size = self.recipes.len(),
                    "Exact cover search hit its node limit"
                );
                None
            }
        }
    }
}

fn build_suggestion(
    recipe: &Recipe,
    available: &AvailableIngredients,
    matching: usize,
    enhanced_score: Option<f64>,
) -> RecipeSuggestion {
    let gaps = gap_analysis(recipe, available);
    let substitutions = substitution_recommendations(&gaps, recipe);

    RecipeSuggestion {
        name: recipe.name.clone(),
        matching,
        total: recipe.total_ingredients(),
        enhanced_score,
        gaps,
        substitutions,
        instructions: recipe.instructions.clone(),
    }
}
