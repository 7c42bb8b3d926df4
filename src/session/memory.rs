use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use super::{ContinuationState, SessionStore};

/// In-process session store. State lives only as long as the process;
/// useful for tests and the demo binary's single-shot mode.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, ContinuationState>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, session_id: &str) -> ContinuationState {
        self.sessions
            .read()
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn save(&self, session_id: &str, state: &ContinuationState) {
        self.sessions
            .write()
            .insert(session_id.to_string(), state.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SearchContext, SearchKind};

    #[tokio::test]
    async fn unknown_session_loads_empty_defaults() {
        let store = MemorySessionStore::new();
        let state = store.load("nobody").await;

        assert!(state.seen_track_ids.is_empty());
        assert!(state.last_context.is_none());
        assert_eq!(state.next_index, 0);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = MemorySessionStore::new();

        let mut state = ContinuationState::default();
        state.seen_track_ids.extend([1, 2, 3]);
        state.last_context = Some(SearchContext::new(SearchKind::Genre, "jazz"));
        state.next_index = 50;

        store.save("alice", &state).await;
        let loaded = store.load("alice").await;

        assert_eq!(loaded.seen_track_ids, state.seen_track_ids);
        assert_eq!(loaded.last_context, state.last_context);
        assert_eq!(loaded.next_index, 50);

        // Sessions are isolated from one another.
        assert!(store.load("bob").await.seen_track_ids.is_empty());
    }
}
