use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A recipe from the catalog
///
/// Recipes are loaded once and shared read-only by every request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Unique name of the recipe within the catalog
    pub name: String,
    /// Ingredient names in the order the catalog lists them
    pub ingredients: Vec<String>,
    /// Free-text preparation instructions
    #[serde(default)]
    pub instructions: String,
    /// Substitute descriptions keyed by ingredient name
    #[serde(default)]
    pub substitutions: BTreeMap<String, String>,
}

impl Recipe {
    /// Creates a recipe with no instructions or substitutions
    pub fn new<I, S>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            instructions: String::new(),
            substitutions: BTreeMap::new(),
        }
    }

    /// Sets the instructions
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Registers a substitute for one ingredient
    pub fn with_substitution(
        mut self,
        ingredient: impl Into<String>,
        substitute: impl Into<String>,
    ) -> Self {
        self.substitutions
            .insert(ingredient.into(), substitute.into());
        self
    }

    /// Distinct ingredient names
    pub fn ingredient_set(&self) -> HashSet<&str> {
        self.ingredients.iter().map(String::as_str).collect()
    }

    /// Number of ingredient entries, duplicates included
    pub fn total_ingredients(&self) -> usize {
        self.ingredients.len()
    }
}
