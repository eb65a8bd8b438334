//! Recipe catalog loading
//!
//! The catalog is read once at startup and shared read-only afterwards.
//! Sources sit behind [`RecipeSource`] so the server can be started from a
//! file, or from anything else that yields recipes.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::{
    error::{AppError, AppResult},
    models::Recipe,
};

/// Trait for recipe catalog sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecipeSource: Send + Sync {
    /// Load every recipe, in catalog order
    async fn load(&self) -> AppResult<Vec<Recipe>>;

    /// Human-readable origin for logging
    fn describe(&self) -> String;
}

/// Catalog stored as a JSON array of recipe records
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl RecipeSource for JsonFileSource {
    async fn load(&self) -> AppResult<Vec<Recipe>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let recipes: Vec<Recipe> = serde_json::from_slice(&bytes)?;
        Ok(recipes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Rejects catalogs where two recipes share a name
pub fn validate_catalog(recipes: &[Recipe]) -> AppResult<()> {
    let mut names = HashSet::new();
    for recipe in recipes {
        if !names.insert(recipe.name.as_str()) {
            return Err(AppError::Catalog(format!(
                "duplicate recipe name: {}",
                recipe.name
            )));
        }
    }
    Ok(())
}

/// Loads and validates a catalog
pub async fn load_catalog(source: &dyn RecipeSource) -> AppResult<Vec<Recipe>> {
    let recipes = source.load().await?;
    validate_catalog(&recipes)?;

    tracing::info!(
        source = %source.describe(),
        recipes = recipes.len(),
        "Recipe catalog loaded"
    );

    Ok(recipes)
}
