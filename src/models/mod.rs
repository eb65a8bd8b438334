use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod available;
pub mod recipe;

pub use available::AvailableIngredients;
pub use recipe::Recipe;

/// Request for recipe suggestions
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionRequest {
    /// Ingredients the caller has on hand, matched by exact spelling
    pub ingredients: Vec<String>,
    /// Try to find a set of recipes that uses exactly the given ingredients
    #[serde(default)]
    pub use_backtracking: bool,
}

/// How the suggestions in a response were produced
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionMode {
    /// Ranked by graph-enhanced score
    Greedy,
    /// An exact cover of the available ingredients
    BacktrackingCombo,
}

/// One suggested recipe with its gap analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeSuggestion {
    pub name: String,
    /// Distinct recipe ingredients the caller has
    pub matching: usize,
    /// Ingredient entries in the recipe, duplicates included
    pub total: usize,
    /// Present in greedy mode only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_score: Option<f64>,
    pub gaps: Vec<String>,
    pub substitutions: BTreeMap<String, String>,
    pub instructions: String,
}

/// Response with suggestions and ingredients worth buying
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionResponse {
    pub suggestions: Vec<RecipeSuggestion>,
    #[serde(rename = "type")]
    pub mode: SuggestionMode,
    pub complementary_ingredients: Vec<String>,
}
