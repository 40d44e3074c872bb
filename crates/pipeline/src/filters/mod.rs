//! Filter implementations for the query pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod category;
pub mod favorites_only;
pub mod language;
pub mod level;
pub mod minimum_rating;
pub mod price_range;
pub mod text_query;

// Re-export for convenience
pub use category::CategoryFilter;
pub use favorites_only::FavoritesOnlyFilter;
pub use language::LanguageFilter;
pub use level::LevelFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use price_range::{PriceRange, PriceRangeFilter};
pub use text_query::TextQueryFilter;
