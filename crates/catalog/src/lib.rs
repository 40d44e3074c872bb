//! # Catalog Crate
//!
//! This crate owns the course catalog: the immutable list of courses every
//! query and recommendation runs over.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Course, Category, Level, Catalog)
//! - **parser**: Parse JSON catalog files into Course records
//! - **index**: Build and validate a Catalog, built-in fixture data
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/courses.json"))?;
//! let course = catalog.get("react-fundamentals").unwrap();
//! println!("{} by {}", course.name, course.instructor);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    CourseId,
    Price,
    // Core types
    Course,
    Catalog,
    // Enums
    Category,
    Level,
};
