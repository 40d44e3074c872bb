//! # Sources Crate
//!
//! This crate implements the recommendation engine for the course catalog.
//!
//! ## Components
//!
//! ### Interaction State
//! A user's favorites (a set) and view history (ordered, re-views move to
//! the end). Plain values owned by the caller.
//!
//! ### Tier Sources
//! - **Favorited**: courses the user saved
//! - **Recently viewed**: courses the user opened but did not save
//! - **Similar**: untouched courses sharing a category, level or
//!   instructor with anything the user favorited or viewed
//! - **Top rated**: the cold-start source, rating >= 4.7
//!
//! ### Recommendation Engine
//! Concatenates the tiers (or the top-rated list for a new user),
//! stable-sorts by rating and keeps the first six.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{InteractionState, RecommendationEngine};
//!
//! let mut state = InteractionState::new();
//! state.toggle_favorite("react-fundamentals");
//! state.record_view("ui-ux-design");
//!
//! let engine = RecommendationEngine::new();
//! let suggestions = engine.suggest(
//!     catalog.courses(),
//!     state.favorites(),
//!     state.view_history(),
//! );
//! ```

// Public modules
pub mod types;
pub mod interaction;
pub mod profile;
pub mod favorited;
pub mod recently_viewed;
pub mod similar;
pub mod top_rated;
pub mod engine;

#[cfg(test)]
mod test_util;

// Re-export commonly used types
pub use types::{Candidate, Suggestion, Tier};
pub use interaction::InteractionState;
pub use profile::{build_profile, InteractionProfile};
pub use favorited::FavoritedSource;
pub use recently_viewed::RecentlyViewedSource;
pub use similar::SimilarSource;
pub use top_rated::TopRatedSource;
pub use engine::{recommend, suggest, RecommendationEngine, DEFAULT_LIMIT};
