//! Persistence for per-user interaction state.
//!
//! The engines never touch storage: callers load an `InteractionState`,
//! mutate it, and save it back.

use sources::InteractionState;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

/// Key under which a user's state is stored
pub type UserId = String;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Corrupt state file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value storage for interaction state
pub trait InteractionStore: Send + Sync {
    /// State for `user`; a user never seen before gets an empty state
    fn load(&self, user: &str) -> Result<InteractionState, StoreError>;

    fn save(&self, user: &str, state: &InteractionState) -> Result<(), StoreError>;
}

/// Process-local store, used in tests and for throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    states: Mutex<HashMap<UserId, InteractionState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InteractionStore for MemoryStore {
    fn load(&self, user: &str) -> Result<InteractionState, StoreError> {
        let states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(states.get(user).cloned().unwrap_or_default())
    }

    fn save(&self, user: &str, state: &InteractionState) -> Result<(), StoreError> {
        let mut states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        states.insert(user.to_string(), state.clone());
        Ok(())
    }
}

/// All users' state in one JSON object keyed by user id.
///
/// A missing file reads as empty. Every save rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<UserId, InteractionState>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl InteractionStore for JsonFileStore {
    fn load(&self, user: &str) -> Result<InteractionState, StoreError> {
        let mut states = self.read_all()?;
        Ok(states.remove(user).unwrap_or_default())
    }

    fn save(&self, user: &str, state: &InteractionState) -> Result<(), StoreError> {
        let mut states = self.read_all()?;
        states.insert(user.to_string(), state.clone());

        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent,
            None => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        // Sibling temp file renamed over the old one: readers see old or new, never partial
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        serde_json::to_writer_pretty(&mut tmp, &states).map_err(|source| StoreError::Json {
            path: self.path.display().to_string(),
            source,
        })?;
        tmp.flush().map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        debug!("Saved state for {} to {}", user, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_state() -> InteractionState {
        let mut state = InteractionState::new();
        state.toggle_favorite("rust-systems");
        state.record_view("ui-ux-design");
        state.record_view("rust-systems");
        state
    }

    #[test]
    fn test_memory_store_unknown_user_is_empty() {
        let store = MemoryStore::new();
        assert!(store.load("nobody").unwrap().is_empty());
    }

    #[test]
    fn test_memory_store_save_and_load() {
        let store = MemoryStore::new();
        store.save("user-1", &sample_state()).unwrap();

        assert_eq!(store.load("user-1").unwrap(), sample_state());
        assert!(store.load("user-2").unwrap().is_empty());
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("state.json"));
        assert!(store.load("user-1").unwrap().is_empty());
    }

    #[test]
    fn test_json_store_keeps_other_users() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("state.json"));

        store.save("user-1", &sample_state()).unwrap();
        let mut other = InteractionState::new();
        other.record_view("japanese-n5");
        store.save("user-2", &other).unwrap();

        assert_eq!(store.load("user-1").unwrap(), sample_state());
        assert_eq!(store.load("user-2").unwrap(), other);

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("viewHistory"));
    }

    #[test]
    fn test_json_store_save_replaces_file_whole() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let store = JsonFileStore::new(&path);

        store.save("user-1", &sample_state()).unwrap();
        store.save("user-1", &InteractionState::new()).unwrap();

        // Only the state file remains; no temp files left next to it
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<UserId, InteractionState> = serde_json::from_str(&raw).unwrap();
        assert!(parsed["user-1"].is_empty());
    }

    #[test]
    fn test_json_store_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();

        let result = JsonFileStore::new(path).load("user-1");
        assert!(matches!(result, Err(StoreError::Json { .. })));
    }
}
