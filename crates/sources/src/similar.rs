//! Similar tier: content-based discovery around what the user touched.
//!
//! ## Algorithm
//! 1. The profile holds the categories, levels and instructors of every
//!    favorited or viewed course
//! 2. Keep each course the user has not interacted with that matches at
//!    least one of those attributes
//! 3. Catalog order is kept; ranking happens later in the engine

use crate::profile::InteractionProfile;
use crate::types::{Candidate, Tier};
use catalog::Course;
use tracing::{debug, instrument};

/// Third tier of the warm policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarSource;

impl SimilarSource {
    #[instrument(skip_all, fields(categories = profile.categories.len(), levels = profile.levels.len()))]
    pub fn get_candidates<'a>(
        &self,
        catalog: &'a [Course],
        profile: &InteractionProfile<'_>,
    ) -> Vec<Candidate<'a>> {
        let candidates: Vec<Candidate<'a>> = catalog
            .iter()
            .filter(|course| !profile.has_interacted(course) && profile.is_similar(course))
            .map(|course| Candidate::new(course, Tier::Similar))
            .collect();
        debug!("Generated {} similar candidates", candidates.len());
        candidates
    }
}
