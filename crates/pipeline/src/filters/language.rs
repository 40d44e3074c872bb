//! Filter on the language a course is taught in.

use crate::traits::Filter;
use catalog::Course;

pub struct LanguageFilter {
    language: String,
}

impl LanguageFilter {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn matches(&self, course: &Course) -> bool {
        course.language == self.language
    }
}
