//! Core traits for the query pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to a course list.

use catalog::Course;

/// A single predicate over courses.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets a built pipeline be shared across tasks
/// - Filters work on borrowed courses; nothing is cloned until the
///   final result is handed back to the caller
/// - Filtering is total: a predicate that matches nothing yields an
///   empty list, never an error
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single course passes this filter
    fn matches(&self, course: &Course) -> bool;

    /// Keep the courses that match, preserving their order
    fn apply<'a>(&self, courses: Vec<&'a Course>) -> Vec<&'a Course> {
        courses
            .into_iter()
            .filter(|course| self.matches(course))
            .collect()
    }
}
