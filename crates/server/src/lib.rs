//! Server crate for the course finder.
//!
//! This crate wraps the query and recommendation engines in an async
//! service that behaves like a remote API, and owns configuration and
//! interaction-state persistence.

pub mod config;
pub mod service;
pub mod store;

pub use config::{Config, ConfigError, load_config, load_config_from_str};
pub use service::{CatalogService, RequestTracker, ServiceError};
pub use store::{InteractionStore, JsonFileStore, MemoryStore, StoreError, UserId};
