//! Query engine for the course catalog.
//!
//! This crate provides:
//! - Filter trait and implementations for course predicates
//! - FilterPipeline for composing filters
//! - FilterSpec, the caller's description of a query
//! - `search`, which turns a FilterSpec into a pipeline and runs it
//!
//! ## Architecture
//! A search builds one filter per present FilterSpec field and applies
//! them in sequence. Every filter is a stable retain, so the result is
//! always a subsequence of the catalog in catalog order.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{search, FilterSpec};
//!
//! let spec = FilterSpec {
//!     query: "python".to_string(),
//!     price_range: Some("under-500k".to_string()),
//!     ..FilterSpec::default()
//! };
//! let courses = search(catalog.courses(), &spec);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod filter_spec;
pub mod search;

#[cfg(test)]
mod test_util;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use filter_spec::{FilterField, FilterSpec};
pub use filters::PriceRange;
pub use search::{search, search_refs};
