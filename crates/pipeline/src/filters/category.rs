//! Filter to keep only courses in one category.

use crate::traits::Filter;
use catalog::Course;

/// Keeps courses whose category label equals the requested one.
///
/// The comparison is on the display label ("Data Science"), so a label
/// that names no known category simply matches nothing.
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, course: &Course) -> bool {
        course.category.as_str() == self.category
    }
}
