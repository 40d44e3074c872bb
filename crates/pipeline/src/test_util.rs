//! Course fixtures shared by the unit tests in this crate.

use catalog::{Category, Course, Level};

/// A course with neutral defaults; tests override the fields they care about
pub(crate) fn course(id: &str) -> Course {
    Course {
        id: id.to_string(),
        name: format!("Course {id}"),
        price: 600_000,
        image: String::new(),
        description: String::new(),
        full_description: String::new(),
        category: Category::Programming,
        rating: 4.0,
        reviews: 100,
        instructor: "Instructor".to_string(),
        duration: "10 hours".to_string(),
        level: Level::Beginner,
        language: "English".to_string(),
        tags: vec![],
        features: vec![],
    }
}

pub(crate) fn ids<'a>(courses: &[&'a Course]) -> Vec<&'a str> {
    courses.iter().map(|c| c.id.as_str()).collect()
}
