//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filter_spec::{present, FilterSpec};
use crate::filters::*;
use crate::traits::Filter;
use catalog::Course;
use tracing::{debug, warn};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TextQueryFilter::new("react"))
///     .add_filter(PriceRangeFilter::new(PriceRange::From500kTo1m))
///     .add_filter(MinimumRatingFilter::new(4.5));
///
/// let matching = pipeline.apply(catalog.courses().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a FilterSpec.
    ///
    /// Filters are added in a fixed order: text query, category, price
    /// range, level, language, minimum rating. The predicates are
    /// independent, so the order only matters for the debug log.
    /// An unrecognized price range adds no filter.
    pub fn from_spec(spec: &FilterSpec) -> Self {
        let mut pipeline = Self::new();

        if !spec.query.is_empty() {
            pipeline = pipeline.add_filter(TextQueryFilter::new(&spec.query));
        }
        if let Some(category) = present(&spec.category) {
            pipeline = pipeline.add_filter(CategoryFilter::new(category));
        }
        if let Some(range) = present(&spec.price_range) {
            match range.parse::<PriceRange>() {
                Ok(range) => pipeline = pipeline.add_filter(PriceRangeFilter::new(range)),
                Err(e) => warn!("Ignoring price filter: {}", e),
            }
        }
        if let Some(level) = present(&spec.level) {
            pipeline = pipeline.add_filter(LevelFilter::new(level));
        }
        if let Some(language) = present(&spec.language) {
            pipeline = pipeline.add_filter(LanguageFilter::new(language));
        }
        if let Some(min_rating) = spec.effective_min_rating() {
            pipeline = pipeline.add_filter(MinimumRatingFilter::new(min_rating));
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence.
    ///
    /// ## Algorithm
    /// 1. Start with the input courses
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the surviving courses, still in input order
    pub fn apply<'a>(&self, courses: Vec<&'a Course>) -> Vec<&'a Course> {
        let mut current = courses;
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
