//! Graph-assisted recipe suggestions
//!
//! Given the ingredients a cook has on hand, ranks catalog recipes by a
//! co-occurrence graph score, optionally searches for a set of recipes using
//! exactly those ingredients, and proposes ingredients worth buying next.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
