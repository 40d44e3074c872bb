//! Catalog search: the query engine entry point.

use crate::filter_pipeline::FilterPipeline;
use crate::filter_spec::FilterSpec;
use catalog::Course;
use tracing::debug;

/// Return the courses matching every present predicate of `filter`.
///
/// The result is an order-preserving subsequence of `catalog`. An empty
/// filter returns the whole catalog; a filter that matches nothing
/// returns an empty list. Neither input is modified.
pub fn search(catalog: &[Course], filter: &FilterSpec) -> Vec<Course> {
    search_refs(catalog, filter).into_iter().cloned().collect()
}

/// Like [`search`], but borrows from the catalog instead of cloning.
pub fn search_refs<'a>(catalog: &'a [Course], filter: &FilterSpec) -> Vec<&'a Course> {
    let pipeline = FilterPipeline::from_spec(filter);
    let matching = pipeline.apply(catalog.iter().collect());
    debug!(
        "Search matched {} of {} courses ({} filters)",
        matching.len(),
        catalog.len(),
        pipeline.len()
    );
    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::course;
    use catalog::{Category, Level};

    fn sample() -> Vec<Course> {
        let mut react = course("react");
        react.name = "React Fundamentals".to_string();
        react.tags = vec!["JavaScript".to_string()];
        react.price = 799_000;
        react.rating = 4.8;

        let mut ielts = course("ielts");
        ielts.category = Category::Language;
        ielts.level = Level::Intermediate;
        ielts.price = 499_999;
        ielts.rating = 4.7;

        let mut ml = course("ml");
        ml.category = Category::DataScience;
        ml.level = Level::Advanced;
        ml.price = 1_590_000;
        ml.language = "Vietnamese".to_string();
        ml.rating = 4.2;

        vec![react, ielts, ml]
    }

    fn ids(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_catalog() {
        let catalog = sample();
        assert_eq!(search(&catalog, &FilterSpec::default()), catalog);
    }

    #[test]
    fn test_combined_filters() {
        let catalog = sample();
        let spec = FilterSpec {
            category: Some("Data Science".to_string()),
            language: Some("Vietnamese".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&search(&catalog, &spec)), vec!["ml"]);

        let spec = FilterSpec {
            min_rating: Some(4.5),
            price_range: Some("500k-1m".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&search(&catalog, &spec)), vec!["react"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = sample();
        let spec = FilterSpec {
            level: Some("Expert".to_string()),
            ..FilterSpec::default()
        };
        assert!(search(&catalog, &spec).is_empty());
    }

    #[test]
    fn test_search_refs_borrow() {
        let catalog = sample();
        let found = search_refs(&catalog, &FilterSpec::with_query("java"));
        assert_eq!(found.len(), 1);
        assert!(std::ptr::eq(found[0], &catalog[0]));
    }
}
