//! Free-text search filter.
//!
//! Matches the query case-insensitively as a substring of the course
//! name, its short description, or any of its tags.

use crate::traits::Filter;
use catalog::Course;

/// Keeps courses whose name, description or tags contain the query.
///
/// ## Algorithm
/// The query is lowercased once at construction; each course field is
/// lowercased on comparison. "java" therefore matches a course tagged
/// "JavaScript" even when the name never mentions Java.
pub struct TextQueryFilter {
    needle: String,
}

impl TextQueryFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }
}

impl Filter for TextQueryFilter {
    fn name(&self) -> &str {
        "TextQueryFilter"
    }

    fn matches(&self, course: &Course) -> bool {
        course.name.to_lowercase().contains(&self.needle)
            || course.description.to_lowercase().contains(&self.needle)
            || course
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&self.needle))
    }
}
