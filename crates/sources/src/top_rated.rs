//! Top-rated source: the cold-start policy for users with no history.

use crate::types::{Candidate, Tier};
use catalog::Course;
use tracing::debug;

/// Courses rated at or above a threshold.
#[derive(Debug, Clone, Copy)]
pub struct TopRatedSource {
    min_rating: f32,
}

impl TopRatedSource {
    pub const DEFAULT_MIN_RATING: f32 = 4.7;

    pub fn new() -> Self {
        Self {
            min_rating: Self::DEFAULT_MIN_RATING,
        }
    }

    /// Configure the minimum rating threshold (default: 4.7)
    pub fn with_min_rating(mut self, rating: f32) -> Self {
        self.min_rating = rating;
        self
    }

    pub fn min_rating(&self) -> f32 {
        self.min_rating
    }

    /// Qualifying courses in catalog order; the engine sorts them
    pub fn get_candidates<'a>(&self, catalog: &'a [Course]) -> Vec<Candidate<'a>> {
        let candidates: Vec<Candidate<'a>> = catalog
            .iter()
            .filter(|course| course.rating >= self.min_rating)
            .map(|course| Candidate::new(course, Tier::TopRated))
            .collect();
        debug!(
            "Generated {} top rated candidates (min rating {})",
            candidates.len(),
            self.min_rating
        );
        candidates
    }
}

impl Default for TopRatedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::course;

    #[test]
    fn test_threshold_is_inclusive() {
        let catalog = vec![course("a", 4.9), course("b", 4.5), course("c", 4.7)];
        let candidates = TopRatedSource::new().get_candidates(&catalog);
        let ids: Vec<&str> = candidates.iter().map(|c| c.course.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_custom_threshold() {
        let catalog = vec![course("a", 4.9), course("b", 4.5)];
        let source = TopRatedSource::new().with_min_rating(4.0);
        assert_eq!(source.get_candidates(&catalog).len(), 2);
    }
}
