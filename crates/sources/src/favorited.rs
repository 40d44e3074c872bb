//! Favorited tier: every course the user saved.

use crate::profile::InteractionProfile;
use crate::types::{Candidate, Tier};
use catalog::Course;
use tracing::debug;

/// First tier of the warm policy.
///
/// Yields favorited courses in catalog order. Favorite ids with no
/// catalog entry are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FavoritedSource;

impl FavoritedSource {
    pub fn get_candidates<'a>(
        &self,
        catalog: &'a [Course],
        profile: &InteractionProfile<'_>,
    ) -> Vec<Candidate<'a>> {
        let candidates: Vec<Candidate<'a>> = catalog
            .iter()
            .filter(|course| profile.is_favorite(course))
            .map(|course| Candidate::new(course, Tier::Favorited))
            .collect();
        debug!("Generated {} favorited candidates", candidates.len());
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::build_profile;
    use crate::test_util::course;
    use catalog::CourseId;
    use std::collections::BTreeSet;

    #[test]
    fn test_favorited_in_catalog_order() {
        let catalog = vec![course("a", 4.0), course("b", 4.5), course("c", 3.0)];
        let favorites: BTreeSet<CourseId> =
            ["c".to_string(), "a".to_string(), "ghost".to_string()].into();
        let profile = build_profile(&catalog, &favorites, &[]);

        let candidates = FavoritedSource.get_candidates(&catalog, &profile);
        let ids: Vec<&str> = candidates.iter().map(|c| c.course.id.as_str()).collect();

        assert_eq!(ids, vec!["a", "c"]);
        assert!(candidates.iter().all(|c| c.tier == Tier::Favorited));
    }
}
