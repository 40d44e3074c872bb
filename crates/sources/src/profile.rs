//! Build an InteractionProfile from the catalog and a user's interactions.
//!
//! The profile gathers everything the tier sources need once, up front:
//! - Favorited ids and viewed ids as sets for O(1) lookups
//! - Categories, levels and instructors of every course the user
//!   favorited or viewed
//!
//! ## Note
//! Ids that are not in the catalog still count as interactions (the user
//! is not a cold start), but contribute no attributes.

use catalog::{Category, Course, CourseId, Level};
use std::collections::{BTreeSet, HashSet};

/// Everything known about what a user engaged with, borrowed from the
/// catalog and the interaction state.
#[derive(Debug, Clone)]
pub struct InteractionProfile<'a> {
    pub favorites: &'a BTreeSet<CourseId>,
    pub viewed: HashSet<&'a str>,

    // Attributes of interacted courses (favorited or viewed)
    pub categories: HashSet<Category>,
    pub levels: HashSet<Level>,
    pub instructors: HashSet<&'a str>,
}

impl<'a> InteractionProfile<'a> {
    /// True when the user has no favorites and no views
    pub fn is_cold_start(&self) -> bool {
        self.favorites.is_empty() && self.viewed.is_empty()
    }

    pub fn is_favorite(&self, course: &Course) -> bool {
        self.favorites.contains(&course.id)
    }

    pub fn is_viewed(&self, course: &Course) -> bool {
        self.viewed.contains(course.id.as_str())
    }

    /// Favorited or viewed
    pub fn has_interacted(&self, course: &Course) -> bool {
        self.is_favorite(course) || self.is_viewed(course)
    }

    /// Shares a category, level or instructor with an interacted course
    pub fn is_similar(&self, course: &Course) -> bool {
        self.categories.contains(&course.category)
            || self.levels.contains(&course.level)
            || self.instructors.contains(course.instructor.as_str())
    }
}

/// Build the profile for one recommendation call.
pub fn build_profile<'a>(
    catalog: &'a [Course],
    favorites: &'a BTreeSet<CourseId>,
    view_history: &'a [CourseId],
) -> InteractionProfile<'a> {
    let mut profile = InteractionProfile {
        favorites,
        viewed: view_history.iter().map(String::as_str).collect(),
        categories: HashSet::new(),
        levels: HashSet::new(),
        instructors: HashSet::new(),
    };

    if profile.is_cold_start() {
        return profile;
    }

    let interacted: Vec<&'a Course> = catalog
        .iter()
        .filter(|course| profile.has_interacted(course))
        .collect();

    for course in interacted {
        profile.categories.insert(course.category);
        profile.levels.insert(course.level);
        profile.instructors.insert(course.instructor.as_str());
    }

    profile
}
