//! Filter to ensure a minimum rating.

use crate::traits::Filter;
use catalog::Course;

/// Removes courses rated below the threshold (the threshold itself passes).
pub struct MinimumRatingFilter {
    min_rating: f32,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Inclusive lower bound (the sidebar offers 3.5, 4.0 and 4.5)
    pub fn new(min_rating: f32) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, course: &Course) -> bool {
        course.rating >= self.min_rating
    }
}
