use serde::Deserialize;

use crate::services::{
    combination::DEFAULT_NODE_LIMIT, complements::DEFAULT_COMPLEMENT_TOP_N,
    ranking::DEFAULT_TOP_N, EngineSettings,
};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the JSON recipe catalog
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Maximum number of greedy suggestions per response
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Maximum number of complementary ingredients per response
    #[serde(default = "default_complement_limit")]
    pub complement_limit: usize,

    /// Search-tree nodes the exact cover search may visit, 0 for unbounded
    #[serde(default = "default_cover_search_node_limit")]
    pub cover_search_node_limit: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_catalog_path() -> String {
    "data/recipes.json".to_string()
}

fn default_suggestion_limit() -> usize {
    DEFAULT_TOP_N
}

fn default_complement_limit() -> usize {
    DEFAULT_COMPLEMENT_TOP_N
}

fn default_cover_search_node_limit() -> usize {
    DEFAULT_NODE_LIMIT
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Engine tunables
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            suggestion_limit: self.suggestion_limit,
            complement_limit: self.complement_limit,
            cover_search_node_limit: (self.cover_search_node_limit > 0)
                .then_some(self.cover_search_node_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config: Config = envy::from_iter(vars(&[])).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
        assert_eq!(config.catalog_path, "data/recipes.json");
        assert_eq!(config.engine_settings(), EngineSettings::default());
    }

    #[test]
    fn test_overrides() {
        let config: Config = envy::from_iter(vars(&[
            ("PORT", "8080"),
            ("SUGGESTION_LIMIT", "10"),
            ("COVER_SEARCH_NODE_LIMIT", "0"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        let settings = config.engine_settings();
        assert_eq!(settings.suggestion_limit, 10);
        assert_eq!(settings.cover_search_node_limit, None);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = envy::from_iter::<_, Config>(vars(&[("PORT", "not-a-port")]));
        assert!(result.is_err());
    }
}
