//! The caller-facing description of a catalog query.

use serde::{Deserialize, Serialize};

/// Optional predicates for a catalog search.
///
/// Every field is optional; an absent or empty field places no
/// constraint on that dimension. Attribute values are kept as the
/// strings the caller sent, so an unknown category or level is not an
/// error: it simply matches no course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Free-text query (case-insensitive substring)
    #[serde(default)]
    pub query: String,
    pub category: Option<String>,
    /// One of `under-500k`, `500k-1m`, `over-1m`
    pub price_range: Option<String>,
    pub level: Option<String>,
    pub language: Option<String>,
    /// Inclusive minimum rating; zero means no constraint
    #[serde(rename = "rating")]
    pub min_rating: Option<f32>,
}

/// The single-choice fields a sidebar toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Category,
    PriceRange,
    Level,
    Language,
}

impl FilterSpec {
    /// A spec with only a text query
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// True when no field constrains the result
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && present(&self.category).is_none()
            && present(&self.price_range).is_none()
            && present(&self.level).is_none()
            && present(&self.language).is_none()
            && self.effective_min_rating().is_none()
    }

    /// Select `value` for `field`, or clear the field when `value` is
    /// already the selection.
    pub fn toggle(&mut self, field: FilterField, value: &str) {
        let slot = match field {
            FilterField::Category => &mut self.category,
            FilterField::PriceRange => &mut self.price_range,
            FilterField::Level => &mut self.level,
            FilterField::Language => &mut self.language,
        };
        if slot.as_deref() == Some(value) {
            *slot = None;
        } else {
            *slot = Some(value.to_string());
        }
    }

    /// Same toggle semantics for the minimum rating
    pub fn toggle_min_rating(&mut self, rating: f32) {
        if self.min_rating == Some(rating) {
            self.min_rating = None;
        } else {
            self.min_rating = Some(rating);
        }
    }

    pub(crate) fn effective_min_rating(&self) -> Option<f32> {
        self.min_rating.filter(|r| *r > 0.0)
    }
}

/// `Some(value)` only for a non-empty string
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
