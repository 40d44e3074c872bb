//! Course fixtures shared by the unit tests in this crate.

use catalog::{Category, Course, Level};

pub(crate) fn course(id: &str, rating: f32) -> Course {
    Course {
        id: id.to_string(),
        name: format!("Course {id}"),
        price: 600_000,
        image: String::new(),
        description: String::new(),
        full_description: String::new(),
        category: Category::Programming,
        rating,
        reviews: 100,
        instructor: format!("Instructor {id}"),
        duration: "10 hours".to_string(),
        level: Level::Beginner,
        language: "English".to_string(),
        tags: vec![],
        features: vec![],
    }
}

/// A course that shares nothing with `course()` defaults
pub(crate) fn unrelated(id: &str, rating: f32) -> Course {
    let mut c = course(id, rating);
    c.category = Category::Finance;
    c.level = Level::Advanced;
    c
}
