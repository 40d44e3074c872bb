//! Recently viewed tier: courses the user opened but did not save.

use crate::profile::InteractionProfile;
use crate::types::{Candidate, Tier};
use catalog::Course;
use tracing::debug;

/// Second tier of the warm policy.
///
/// Courses in the view history that are not favorites, in catalog order
/// (history order is not used; the final rating sort reorders anyway).
#[derive(Debug, Clone, Copy, Default)]
pub struct RecentlyViewedSource;

impl RecentlyViewedSource {
    pub fn get_candidates<'a>(
        &self,
        catalog: &'a [Course],
        profile: &InteractionProfile<'_>,
    ) -> Vec<Candidate<'a>> {
        let candidates: Vec<Candidate<'a>> = catalog
            .iter()
            .filter(|course| profile.is_viewed(course) && !profile.is_favorite(course))
            .map(|course| Candidate::new(course, Tier::RecentlyViewed))
            .collect();
        debug!("Generated {} recently viewed candidates", candidates.len());
        candidates
    }
}
