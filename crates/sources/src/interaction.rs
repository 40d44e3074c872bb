//! Per-user interaction state: favorites and view history.
//!
//! This is a plain value object. The engines only ever read it; the
//! caller mutates it between calls and is responsible for persisting it.

use catalog::CourseId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A user's favorites and view history.
///
/// ## Invariants
/// - `favorites` is a set: membership is all that matters
/// - `view_history` holds each id at most once, oldest first; viewing a
///   course again moves it to the end instead of adding a duplicate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawInteractionState")]
pub struct InteractionState {
    favorites: BTreeSet<CourseId>,
    view_history: Vec<CourseId>,
}

/// Unchecked wire form; converted through `from_parts` on deserialize
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInteractionState {
    #[serde(default)]
    favorites: BTreeSet<CourseId>,
    #[serde(default)]
    view_history: Vec<CourseId>,
}

impl From<RawInteractionState> for InteractionState {
    fn from(raw: RawInteractionState) -> Self {
        Self::from_parts(raw.favorites, raw.view_history)
    }
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from stored parts, collapsing repeated history
    /// entries to their most recent position.
    pub fn from_parts(
        favorites: impl IntoIterator<Item = CourseId>,
        view_history: impl IntoIterator<Item = CourseId>,
    ) -> Self {
        let mut state = Self {
            favorites: favorites.into_iter().collect(),
            view_history: Vec::new(),
        };
        for id in view_history {
            state.record_view(id);
        }
        state
    }

    pub fn favorites(&self) -> &BTreeSet<CourseId> {
        &self.favorites
    }

    /// Viewed ids, oldest first
    pub fn view_history(&self) -> &[CourseId] {
        &self.view_history
    }

    /// No favorites and no history: the cold-start case
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty() && self.view_history.is_empty()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Add or remove a favorite. Returns true when the course is now a
    /// favorite.
    pub fn toggle_favorite(&mut self, id: impl Into<CourseId>) -> bool {
        let id = id.into();
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    /// Record that a course was opened; it becomes the most recent entry
    pub fn record_view(&mut self, id: impl Into<CourseId>) {
        let id = id.into();
        self.view_history.retain(|existing| *existing != id);
        self.view_history.push(id);
    }

    /// Up to `n` viewed ids, most recent first
    pub fn recent_views(&self, n: usize) -> impl Iterator<Item = &CourseId> {
        self.view_history.iter().rev().take(n)
    }
}
