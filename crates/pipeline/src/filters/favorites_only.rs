//! Filter backing the "favorites" page: only courses the user saved.

use crate::traits::Filter;
use catalog::{Course, CourseId};
use std::collections::HashSet;

/// Keeps only courses whose id is in the favorites set.
///
/// Uses a HashSet for O(1) membership checks.
pub struct FavoritesOnlyFilter {
    favorites: HashSet<CourseId>,
}

impl FavoritesOnlyFilter {
    pub fn new(favorites: impl IntoIterator<Item = CourseId>) -> Self {
        Self {
            favorites: favorites.into_iter().collect(),
        }
    }
}

impl Filter for FavoritesOnlyFilter {
    fn name(&self) -> &str {
        "FavoritesOnlyFilter"
    }

    fn matches(&self, course: &Course) -> bool {
        self.favorites.contains(&course.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{course, ids};

    #[test]
    fn test_favorites_only_filter() {
        let a = course("a");
        let b = course("b");
        let c = course("c");

        let filter = FavoritesOnlyFilter::new(["c".to_string(), "a".to_string()]);
        let filtered = filter.apply(vec![&a, &b, &c]);

        // Catalog order, not favorites order
        assert_eq!(ids(&filtered), vec!["a", "c"]);
    }

    #[test]
    fn test_no_favorites_keeps_nothing() {
        let a = course("a");
        let filter = FavoritesOnlyFilter::new(Vec::new());
        assert!(filter.apply(vec![&a]).is_empty());
    }
}
