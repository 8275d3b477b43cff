//! The whitelisted application-state slice.
//!
//! Only two fields survive a restart: the last visited route and the set of
//! completed quizzes. Everything else in the application is ephemeral on
//! purpose, so the slice is an explicit whitelist rather than a dump of the
//! live state.

use serde::{Deserialize, Serialize};

use crate::STATE_KEY;
use crate::error::{PersistError, Result};
use crate::store::KeyValueStore;

/// The slice of application state persisted under [`STATE_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Canonical path of the last route the user visited.
    #[serde(default)]
    pub last_route: Option<String>,
    /// Quiz ids the user has answered correctly, in completion order.
    #[serde(default)]
    pub completed_quizzes: Vec<String>,
}

impl PersistedState {
    /// Read the slice back from the store. Absent or malformed payloads
    /// yield the default slice; persisted state is a convenience, never a
    /// startup hazard.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(payload) = store.get(STATE_KEY) else {
            return Self::default();
        };
        match serde_json::from_str(&payload) {
            Ok(state) => state,
            Err(error) => {
                tracing::warn!(%error, "persisted state is unreadable, starting fresh");
                Self::default()
            }
        }
    }

    /// Write the slice as JSON under the versioned key.
    pub fn store(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        let payload = serde_json::to_string(self).map_err(|e| PersistError::Serialize {
            source: Box::new(e),
        })?;
        store.set(STATE_KEY, &payload)
    }

    /// Record a completed quiz, keeping the list free of duplicates.
    pub fn mark_quiz_completed(&mut self, quiz_id: &str) -> bool {
        if self.completed_quizzes.iter().any(|id| id == quiz_id) {
            return false;
        }
        self.completed_quizzes.push(quiz_id.to_string());
        true
    }

    pub fn is_quiz_completed(&self, quiz_id: &str) -> bool {
        self.completed_quizzes.iter().any(|id| id == quiz_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn marking_a_quiz_twice_records_it_once() {
        let mut state = PersistedState::default();
        assert!(state.mark_quiz_completed("store-api"));
        assert!(!state.mark_quiz_completed("store-api"));
        assert_eq!(state.completed_quizzes, vec!["store-api".to_string()]);
        assert!(state.is_quiz_completed("store-api"));
        assert!(!state.is_quiz_completed("reducer-purity"));
    }

    #[test]
    fn missing_payload_loads_as_default() {
        let store = MemoryStore::new();
        assert_eq!(PersistedState::load(&store), PersistedState::default());
    }
}
