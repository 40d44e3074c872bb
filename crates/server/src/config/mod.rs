//! Runtime configuration for the course finder.
//!
//! Layers, lowest priority first: built-in defaults, an optional TOML file,
//! then `COURSE_FINDER_*` environment variables (nested keys split on `__`,
//! e.g. `COURSE_FINDER_LATENCY__SEARCH_MS=0`).

mod loader;
mod types;
mod validate;

pub use loader::{load_config, load_config_from_str, ENV_PREFIX};
pub use types::*;
pub use validate::validate_config;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
