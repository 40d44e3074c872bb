//! # Catalog Service
//!
//! Async facade over the query and recommendation engines that behaves
//! like a remote API:
//! 1. Every call waits a configured latency before answering
//! 2. A call may fail with a generic retryable error (`failure_rate`)
//! 3. Overlapping searches are tracked so only the latest result is used
//!
//! The engines themselves stay synchronous; this layer only adds timing
//! and failure behaviour around them.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, warn};

use catalog::{Catalog, Category, Course};
use pipeline::{FilterSpec, search};
use sources::{InteractionState, RecommendationEngine, Suggestion};

use crate::config::Config;
use crate::store::{InteractionStore, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transient failure with no structured cause; the caller may retry
    #[error("The service is temporarily unavailable, please try again")]
    Unavailable,

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Issues increasing tickets so a caller can tell whether a finished
/// request is still the most recent one.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; any earlier ticket becomes stale
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

/// Simulated course API
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
    engine: RecommendationEngine,
    search_latency: Duration,
    suggest_latency: Duration,
    failure_rate: f64,
    searches: Arc<RequestTracker>,
}

impl CatalogService {
    /// Service with the default latencies (500 ms search, 1000 ms
    /// suggestions) and no injected failures
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::from_config(catalog, &Config::default())
    }

    pub fn from_config(catalog: Arc<Catalog>, config: &Config) -> Self {
        let engine = RecommendationEngine::new()
            .with_limit(config.recommend.limit)
            .with_cold_start_min_rating(config.recommend.cold_start_min_rating);

        Self {
            catalog,
            engine,
            search_latency: config.latency.search(),
            suggest_latency: config.latency.suggest(),
            failure_rate: config.failure_rate,
            searches: Arc::new(RequestTracker::new()),
        }
    }

    /// Override both latencies
    pub fn with_latency(mut self, search: Duration, suggest: Duration) -> Self {
        self.search_latency = search;
        self.suggest_latency = suggest;
        self
    }

    /// Probability in [0, 1] that a call fails with `Unavailable`
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate.clamp(0.0, 1.0);
        self
    }

    /// Synchronous lookup by id
    pub fn get_course(&self, id: &str) -> Option<&Course> {
        self.catalog.get(id)
    }

    /// Categories with their course counts, in display order
    pub fn categories(&self) -> Vec<(Category, usize)> {
        self.catalog.category_counts()
    }

    /// Search the catalog after the search latency
    pub async fn fetch_courses(&self, filter: &FilterSpec) -> Result<Vec<Course>, ServiceError> {
        let start_time = Instant::now();
        tokio::time::sleep(self.search_latency).await;
        self.maybe_fail("search")?;

        let courses = search(self.catalog.courses(), filter);
        info!(
            "Search returned {} of {} courses in {:.2?}",
            courses.len(),
            self.catalog.len(),
            start_time.elapsed()
        );
        Ok(courses)
    }

    /// Like [`fetch_courses`](Self::fetch_courses), but returns `None` when
    /// another search started while this one was in flight.
    pub async fn search_latest(
        &self,
        filter: &FilterSpec,
    ) -> Result<Option<Vec<Course>>, ServiceError> {
        let ticket = self.searches.begin();
        let result = self.fetch_courses(filter).await;

        if !self.searches.is_latest(ticket) {
            debug!("Discarding stale search result (ticket {})", ticket);
            return Ok(None);
        }
        result.map(Some)
    }

    /// Ranked suggestions after the suggestion latency
    pub async fn fetch_suggestions(
        &self,
        state: &InteractionState,
    ) -> Result<Vec<Suggestion>, ServiceError> {
        let start_time = Instant::now();
        tokio::time::sleep(self.suggest_latency).await;
        self.maybe_fail("suggestions")?;

        let suggestions = self.engine.suggest(
            self.catalog.courses(),
            state.favorites(),
            state.view_history(),
        );
        info!(
            "Built {} suggestions in {:.2?}",
            suggestions.len(),
            start_time.elapsed()
        );
        Ok(suggestions)
    }

    /// Open a course for `user`: records the view and returns the course
    pub fn view_course(
        &self,
        store: &dyn InteractionStore,
        user: &str,
        id: &str,
    ) -> Result<Course, ServiceError> {
        let course = self
            .get_course(id)
            .ok_or_else(|| ServiceError::CourseNotFound(id.to_string()))?;

        let mut state = store.load(user)?;
        state.record_view(id);
        store.save(user, &state)?;
        Ok(course.clone())
    }

    /// Toggle a favorite for `user`. Returns true when it is now a favorite.
    pub fn toggle_favorite(
        &self,
        store: &dyn InteractionStore,
        user: &str,
        id: &str,
    ) -> Result<bool, ServiceError> {
        if !self.catalog.contains(id) {
            return Err(ServiceError::CourseNotFound(id.to_string()));
        }

        let mut state = store.load(user)?;
        let favorited = state.toggle_favorite(id);
        store.save(user, &state)?;
        Ok(favorited)
    }

    fn maybe_fail(&self, operation: &str) -> Result<(), ServiceError> {
        if self.failure_rate > 0.0 && rand::random::<f64>() < self.failure_rate {
            warn!("Injected failure for {}", operation);
            return Err(ServiceError::Unavailable);
        }
        Ok(())
    }
}
