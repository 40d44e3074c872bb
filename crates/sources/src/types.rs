//! Candidate and suggestion types shared by every tier source.

use catalog::Course;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which rule put a course on the suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// The user saved this course
    Favorited,
    /// The user opened this course and did not save it
    RecentlyViewed,
    /// Shares a category, level or instructor with something the user touched
    Similar,
    /// Cold start: highly rated for everyone
    TopRated,
}

impl Tier {
    /// Short human-readable reason, used by `--explain` style output
    pub fn reason(&self) -> &'static str {
        match self {
            Tier::Favorited => "in your favorites",
            Tier::RecentlyViewed => "you viewed this recently",
            Tier::Similar => "similar to courses you liked or viewed",
            Tier::TopRated => "top rated",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// A course borrowed from the catalog, tagged with the tier that produced it
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub course: &'a Course,
    pub tier: Tier,
}

impl<'a> Candidate<'a> {
    pub fn new(course: &'a Course, tier: Tier) -> Self {
        Self { course, tier }
    }
}

/// An owned, ranked suggestion handed back to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub course: Course,
    pub tier: Tier,
}

impl From<Candidate<'_>> for Suggestion {
    fn from(candidate: Candidate<'_>) -> Self {
        Self {
            course: candidate.course.clone(),
            tier: candidate.tier,
        }
    }
}
