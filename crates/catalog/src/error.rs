//! Error types for the catalog crate.
//!
//! Loading is the only fallible step: once a `Catalog` exists, every
//! lookup is total and returns `Option` or an empty slice instead.

use thiserror::Error;

/// Errors that can occur while loading and validating a course catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog file is not a valid JSON array of courses
    #[error("Parse error in {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two courses share the same identifier
    #[error("Duplicate course id: {id}")]
    DuplicateId { id: String },

    /// A course field had an invalid value
    #[error("Invalid value for {field} on course {id}: {value}")]
    InvalidValue {
        id: String,
        field: String,
        value: String,
    },

    /// Catalog-wide validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
