//! Recommendation engine: combines the tier sources into one ranked list.
//!
//! ## Policy
//! - **Cold start** (no favorites, no history): top-rated courses
//! - **Warm**: favorited ++ recently viewed ++ similar, in that order
//!
//! Either way the candidates are then stable-sorted by rating, highest
//! first, and truncated to the limit. The sort runs over the whole
//! concatenation, so tiers decide *membership* and rating decides order:
//! a 4.0 favorite can land behind a 5.0 similar course.

use crate::favorited::FavoritedSource;
use crate::profile::build_profile;
use crate::recently_viewed::RecentlyViewedSource;
use crate::similar::SimilarSource;
use crate::top_rated::TopRatedSource;
use crate::types::{Candidate, Suggestion};
use catalog::{Course, CourseId};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Default number of suggestions returned
pub const DEFAULT_LIMIT: usize = 6;

/// Configurable recommendation engine. Holds no per-user state.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    limit: usize,
    favorited: FavoritedSource,
    recently_viewed: RecentlyViewedSource,
    similar: SimilarSource,
    top_rated: TopRatedSource,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            favorited: FavoritedSource,
            recently_viewed: RecentlyViewedSource,
            similar: SimilarSource,
            top_rated: TopRatedSource::new(),
        }
    }

    /// Configure the maximum number of suggestions (default: 6)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Configure the cold-start rating threshold (default: 4.7)
    pub fn with_cold_start_min_rating(mut self, rating: f32) -> Self {
        self.top_rated = self.top_rated.with_min_rating(rating);
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Ranked candidates borrowed from the catalog
    #[instrument(skip_all, fields(favorites = favorites.len(), history = view_history.len()))]
    pub fn rank<'a>(
        &self,
        catalog: &'a [Course],
        favorites: &BTreeSet<CourseId>,
        view_history: &[CourseId],
    ) -> Vec<Candidate<'a>> {
        let profile = build_profile(catalog, favorites, view_history);

        let mut candidates = if profile.is_cold_start() {
            debug!("No interactions, using cold-start policy");
            self.top_rated.get_candidates(catalog)
        } else {
            let mut tiers = self.favorited.get_candidates(catalog, &profile);
            tiers.extend(self.recently_viewed.get_candidates(catalog, &profile));
            tiers.extend(self.similar.get_candidates(catalog, &profile));
            tiers
        };

        // Vec::sort_by is stable: equal ratings keep tier-then-catalog order.
        // total_cmp keeps the order total when a rating is NaN.
        candidates.sort_by(|a, b| b.course.rating.total_cmp(&a.course.rating));
        candidates.truncate(self.limit);

        debug!("Selected {} suggestions", candidates.len());
        candidates
    }

    /// Ranked suggestions with the tier that produced each one
    pub fn suggest(
        &self,
        catalog: &[Course],
        favorites: &BTreeSet<CourseId>,
        view_history: &[CourseId],
    ) -> Vec<Suggestion> {
        self.rank(catalog, favorites, view_history)
            .into_iter()
            .map(Suggestion::from)
            .collect()
    }

    /// Ranked courses
    pub fn recommend(
        &self,
        catalog: &[Course],
        favorites: &BTreeSet<CourseId>,
        view_history: &[CourseId],
    ) -> Vec<Course> {
        self.rank(catalog, favorites, view_history)
            .into_iter()
            .map(|candidate| candidate.course.clone())
            .collect()
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Recommend with the default engine (limit 6, cold-start threshold 4.7)
pub fn recommend(
    catalog: &[Course],
    favorites: &BTreeSet<CourseId>,
    view_history: &[CourseId],
) -> Vec<Course> {
    RecommendationEngine::new().recommend(catalog, favorites, view_history)
}

/// [`recommend`], keeping the tier of each suggestion
pub fn suggest(
    catalog: &[Course],
    favorites: &BTreeSet<CourseId>,
    view_history: &[CourseId],
) -> Vec<Suggestion> {
    RecommendationEngine::new().suggest(catalog, favorites, view_history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{course, unrelated};
    use crate::types::Tier;
    use catalog::Category;

    fn ids(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    fn set(ids: &[&str]) -> BTreeSet<CourseId> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cold_start() {
        let catalog = vec![course("a", 4.9), course("b", 4.5), course("c", 4.8)];
        let result = recommend(&catalog, &BTreeSet::new(), &[]);
        assert_eq!(ids(&result), vec!["a", "c"]);
    }

    #[test]
    fn test_cold_start_ties_keep_catalog_order() {
        let catalog = vec![
            course("a", 4.8),
            course("b", 4.9),
            course("c", 4.8),
            course("d", 4.8),
        ];
        let result = recommend(&catalog, &BTreeSet::new(), &[]);
        assert_eq!(ids(&result), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_warm_global_rating_sort() {
        let mut x = course("x", 4.0);
        x.category = Category::Design;
        let mut y = course("y", 4.9);
        y.category = Category::Design;
        let mut z = course("z", 5.0);
        z.category = Category::Design;
        let catalog = vec![x, y, z];

        let history = vec!["y".to_string()];
        let result = suggest(&catalog, &set(&["x"]), &history);

        let ranked: Vec<(&str, Tier)> = result
            .iter()
            .map(|s| (s.course.id.as_str(), s.tier))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("z", Tier::Similar),
                ("y", Tier::RecentlyViewed),
                ("x", Tier::Favorited),
            ]
        );
    }

    #[test]
    fn test_limit_is_six() {
        let catalog: Vec<Course> = (0..10).map(|i| course(&format!("c{i}"), 4.0)).collect();
        let result = recommend(&catalog, &set(&["c0"]), &[]);
        assert_eq!(result.len(), 6);
        // All equal ratings: favorite first, then similar in catalog order
        assert_eq!(ids(&result), vec!["c0", "c1", "c2", "c3", "c4", "c5"]);
    }

    #[test]
    fn test_fewer_candidates_than_limit() {
        let catalog = vec![course("a", 3.0), unrelated("b", 5.0)];
        let result = recommend(&catalog, &set(&["a"]), &[]);
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_unknown_ids_use_warm_policy() {
        let catalog = vec![course("a", 4.9)];
        let result = recommend(&catalog, &set(&["ghost"]), &[]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_configured_engine() {
        let catalog = vec![course("a", 4.9), course("b", 4.5), course("c", 4.8)];
        let engine = RecommendationEngine::new()
            .with_limit(1)
            .with_cold_start_min_rating(4.0);
        let result = engine.recommend(&catalog, &BTreeSet::new(), &[]);
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_nan_ratings_do_not_break_ranking() {
        let mut catalog: Vec<Course> = (0..40)
            .map(|i| course(&format!("c{i}"), (i % 7) as f32 * 0.7))
            .collect();
        catalog[3].rating = f32::NAN;
        catalog[17].rating = f32::NAN;

        let warm = recommend(&catalog, &set(&["c0"]), &[]);
        assert_eq!(warm.len(), 6);

        let finite: Vec<f32> = warm
            .iter()
            .map(|c| c.rating)
            .filter(|r| !r.is_nan())
            .collect();
        assert!(finite.windows(2).all(|w| w[0] >= w[1]));

        let cold = recommend(&catalog, &BTreeSet::new(), &[]);
        assert!(cold.len() <= 6);
    }

    #[test]
    fn test_inputs_untouched() {
        let catalog = vec![course("a", 4.0), course("b", 4.9)];
        let favorites = set(&["a"]);
        let history = vec!["b".to_string()];
        let before = (catalog.clone(), favorites.clone(), history.clone());

        let _ = recommend(&catalog, &favorites, &history);

        assert_eq!((catalog, favorites, history), before);
    }
}
