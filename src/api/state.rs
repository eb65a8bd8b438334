use std::sync::Arc;

use crate::models::Recipe;
use crate::services::{EngineSettings, RecommendationEngine};

/// Shared application state
///
/// The catalog never changes after startup, so requests read it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<Vec<Recipe>>,
    pub settings: EngineSettings,
}

impl AppState {
    /// Creates state over a loaded catalog
    pub fn new(recipes: Vec<Recipe>, settings: EngineSettings) -> Self {
        Self {
            recipes: Arc::new(recipes),
            settings,
        }
    }

    /// Engine borrowing this state's catalog
    pub fn engine(&self) -> RecommendationEngine<'_> {
        RecommendationEngine::new(&self.recipes, self.settings)
    }
}
