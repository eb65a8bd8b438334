//! Recommendation engine
//!
//! Pure computations over an immutable recipe catalog. Nothing here performs
//! I/O or holds state between calls.

pub mod combination;
pub mod complements;
pub mod gaps;
pub mod graph;
pub mod ranking;
pub mod recommendations;
pub mod scoring;

pub use graph::IngredientGraph;
pub use recommendations::{EngineSettings, RecommendationEngine};
