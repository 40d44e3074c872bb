//! Catalog building and validation.
//!
//! Every constructor funnels through `Catalog::from_courses`, which
//! builds the id and category indices and rejects bad records before
//! any engine sees them.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// The fixture catalog compiled into the binary
const BUILTIN_CATALOG: &str = include_str!("../data/courses.json");

impl Catalog {
    /// Load a catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading course catalog from {:?}", path);
        let courses = parser::parse_courses_file(path)?;
        let catalog = Self::from_courses(courses)?;
        info!("Loaded {} courses", catalog.len());
        Ok(catalog)
    }

    /// The built-in fixture catalog
    pub fn builtin() -> Result<Self> {
        let courses = parser::parse_courses(BUILTIN_CATALOG, "builtin")?;
        Self::from_courses(courses)
    }

    /// Build a catalog from records already in memory.
    ///
    /// Order is preserved. Fails on the first invalid record or
    /// duplicate id.
    pub fn from_courses(courses: Vec<Course>) -> Result<Self> {
        validate_records(&courses)?;

        let mut by_id = HashMap::with_capacity(courses.len());
        let mut category_index: HashMap<Category, Vec<usize>> = HashMap::new();

        for (pos, course) in courses.iter().enumerate() {
            if by_id.insert(course.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: course.id.clone(),
                });
            }
            category_index.entry(course.category).or_default().push(pos);
        }

        Ok(Self {
            courses,
            by_id,
            category_index,
        })
    }
}

/// Per-record checks, run in parallel
///
/// - id must be non-empty
/// - rating must be finite and within 0.0 - 5.0
fn validate_records(courses: &[Course]) -> Result<()> {
    courses.par_iter().try_for_each(|course| {
        if course.id.trim().is_empty() {
            return Err(CatalogError::ValidationError(format!(
                "course \"{}\" has an empty id",
                course.name
            )));
        }
        if !course.rating.is_finite() || !(0.0..=5.0).contains(&course.rating) {
            return Err(CatalogError::InvalidValue {
                id: course.id.clone(),
                field: "rating".to_string(),
                value: course.rating.to_string(),
            });
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn course(id: &str, category: Category, rating: f32) -> Course {
        Course {
            id: id.to_string(),
            name: format!("Course {id}"),
            price: 500_000,
            image: String::new(),
            description: String::new(),
            full_description: String::new(),
            category,
            rating,
            reviews: 10,
            instructor: "Someone".to_string(),
            duration: "10 hours".to_string(),
            level: Level::Beginner,
            language: "English".to_string(),
            tags: vec![],
            features: vec![],
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.len() >= 10);
        let total: usize = catalog.category_counts().iter().map(|(_, n)| n).sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn test_from_courses_preserves_order() {
        let catalog = Catalog::from_courses(vec![
            course("b", Category::Design, 4.0),
            course("a", Category::Design, 4.5),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog.courses().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.get("a").unwrap().rating, 4.5);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::from_courses(vec![
            course("a", Category::Design, 4.0),
            course("a", Category::Finance, 4.5),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId { .. })));
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let result = Catalog::from_courses(vec![course("a", Category::Design, 5.5)]);
        assert!(matches!(result, Err(CatalogError::InvalidValue { .. })));

        let result = Catalog::from_courses(vec![course("a", Category::Design, f32::NAN)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = Catalog::from_courses(vec![course(" ", Category::Design, 4.0)]);
        assert!(matches!(result, Err(CatalogError::ValidationError(_))));
    }

    #[test]
    fn test_category_index() {
        let catalog = Catalog::from_courses(vec![
            course("a", Category::Design, 4.0),
            course("b", Category::Finance, 4.0),
            course("c", Category::Design, 4.0),
        ])
        .unwrap();

        let design: Vec<&str> = catalog
            .courses_in_category(Category::Design)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(design, vec!["a", "c"]);
        assert!(catalog.courses_in_category(Category::Marketing).is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&vec![course("a", Category::Finance, 4.2)]).unwrap();
        write!(file, "{json}").unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("a"));
    }
}
