//! Core domain types for the course catalog.
//!
//! Courses are immutable once loaded. Enumerated attributes (category and
//! level) are real enums so the catalog itself can never hold an unknown
//! value; filter inputs stay plain strings and simply fail to match.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a course (e.g. "react-fundamentals")
pub type CourseId = String;

/// Price in minor currency units (VND has no subunit, so this is whole dong)
pub type Price = u64;

// =============================================================================
// Enumerated Attributes
// =============================================================================

/// Course categories offered by the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Programming,
    Language,
    Marketing,
    Design,
    #[serde(rename = "Data Science")]
    DataScience,
    Finance,
}

impl Category {
    /// Every category, in the order the sidebar lists them
    pub const ALL: [Category; 6] = [
        Category::Programming,
        Category::Language,
        Category::Marketing,
        Category::Design,
        Category::DataScience,
        Category::Finance,
    ];

    /// Display label, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Programming => "Programming",
            Category::Language => "Language",
            Category::Marketing => "Marketing",
            Category::Design => "Design",
            Category::DataScience => "Data Science",
            Category::Finance => "Finance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Difficulty level of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| format!("unknown level: {s}"))
    }
}

// =============================================================================
// Course
// =============================================================================

/// A single catalog item.
///
/// Field names serialize in camelCase so catalog files keep the
/// `fullDescription` spelling used by the storefront data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub price: Price,
    pub image: String,
    /// Short blurb shown on cards; searched by the text query
    pub description: String,
    /// Long text shown in the detail view only
    pub full_description: String,
    pub category: Category,
    /// Average rating, 0.0 to 5.0
    pub rating: f32,
    /// Number of reviews behind `rating`
    pub reviews: u32,
    pub instructor: String,
    /// Free-form label such as "42 hours"
    pub duration: String,
    pub level: Level,
    pub language: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

// =============================================================================
// Catalog - The Immutable Course Store
// =============================================================================

/// The source-of-truth course list plus lookup indices.
///
/// `courses` keeps load order, which is the order every query result
/// preserves. The indices store positions into `courses` rather than
/// clones so the catalog owns each record exactly once.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) courses: Vec<Course>,
    /// Position of each course in `courses`, keyed by id
    pub(crate) by_id: HashMap<CourseId, usize>,
    /// Positions grouped by category, ascending
    pub(crate) category_index: HashMap<Category, Vec<usize>>,
}

impl Catalog {
    /// All courses in catalog order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by id
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.by_id.get(id).map(|&pos| &self.courses[pos])
    }

    /// Whether a course with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Courses in one category, in catalog order
    pub fn courses_in_category(&self, category: Category) -> Vec<&Course> {
        self.category_index
            .get(&category)
            .map(|positions| positions.iter().map(|&pos| &self.courses[pos]).collect())
            .unwrap_or_default()
    }

    /// Number of courses per category, for every category (zero included)
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.category_index.get(&c).map_or(0, Vec::len)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
