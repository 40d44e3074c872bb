use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    /// Probability in [0, 1] that a simulated request fails
    #[serde(default)]
    pub failure_rate: f64,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            latency: LatencyConfig::default(),
            failure_rate: 0.0,
            store: StoreConfig::default(),
            recommend: RecommendConfig::default(),
        }
    }
}

/// Where courses come from. No path means the built-in catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Simulated network latency, in milliseconds
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LatencyConfig {
    #[serde(default = "default_search_ms")]
    pub search_ms: u64,
    #[serde(default = "default_suggest_ms")]
    pub suggest_ms: u64,
}

impl LatencyConfig {
    pub fn search(&self) -> Duration {
        Duration::from_millis(self.search_ms)
    }

    pub fn suggest(&self) -> Duration {
        Duration::from_millis(self.suggest_ms)
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            search_ms: default_search_ms(),
            suggest_ms: default_suggest_ms(),
        }
    }
}

fn default_search_ms() -> u64 {
    500
}

fn default_suggest_ms() -> u64 {
    1000
}

/// Interaction state persistence
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("course-finder-state.json")
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecommendConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_cold_start_min_rating")]
    pub cold_start_min_rating: f32,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            cold_start_min_rating: default_cold_start_min_rating(),
        }
    }
}

fn default_limit() -> usize {
    sources::DEFAULT_LIMIT
}

fn default_cold_start_min_rating() -> f32 {
    sources::TopRatedSource::DEFAULT_MIN_RATING
}
