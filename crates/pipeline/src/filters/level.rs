//! Filter to keep only courses at one difficulty level.

use crate::traits::Filter;
use catalog::Course;

/// Exact match on the level label ("Beginner", "Intermediate", "Advanced").
pub struct LevelFilter {
    level: String,
}

impl LevelFilter {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
        }
    }
}

impl Filter for LevelFilter {
    fn name(&self) -> &str {
        "LevelFilter"
    }

    fn matches(&self, course: &Course) -> bool {
        course.level.as_str() == self.level
    }
}
