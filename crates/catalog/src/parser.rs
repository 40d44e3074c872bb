//! Parser for catalog files.
//!
//! A catalog file is a JSON array of course objects:
//!
//! ```json
//! [{ "id": "react-fundamentals", "name": "React Fundamentals", "price": 799000, ... }]
//! ```

use crate::error::{CatalogError, Result};
use crate::types::Course;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a catalog file into course records, in file order
pub fn parse_courses_file(path: &Path) -> Result<Vec<Course>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    parse_courses(&content, &path.display().to_string())
}

/// Parse catalog JSON held in memory.
///
/// `source_name` only labels parse errors.
pub fn parse_courses(content: &str, source_name: &str) -> Result<Vec<Course>> {
    serde_json::from_str(content).map_err(|source| CatalogError::ParseError {
        file: source_name.to_string(),
        source,
    })
}
