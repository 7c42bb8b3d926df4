//! Per-session continuation state and its stores.
//!
//! The state is read once before a turn (to seed exclusions and the
//! resume offset) and written once after. The engine never touches a
//! store directly; the hosting layer owns the load-compute-save cycle
//! and is expected to serialize turns per session.

pub mod file;
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::search::{SearchBatch, SearchContext};

pub use file::JsonFileSessionStore;
pub use memory::MemorySessionStore;

/// Everything a session needs to answer "more": which ids were already
/// shown, what search produced the last batch, and where to resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContinuationState {
    /// Ids of every track shown to this session. Grows monotonically.
    #[serde(default)]
    pub seen_track_ids: HashSet<u64>,
    /// Tag of the most recent successful search; `None` until one runs.
    #[serde(default)]
    pub last_context: Option<SearchContext>,
    /// Pagination offset the next continuation should start from.
    #[serde(default)]
    pub next_index: usize,
    pub updated_at: DateTime<Utc>,
}

impl Default for ContinuationState {
    fn default() -> Self {
        Self {
            seen_track_ids: HashSet::new(),
            last_context: None,
            next_index: 0,
            updated_at: Utc::now(),
        }
    }
}

impl ContinuationState {
    /// Fold a successful batch into the session: merge its ids into the
    /// seen set, remember its context, and move the resume offset.
    pub fn apply(&mut self, batch: &SearchBatch) {
        self.seen_track_ids.extend(batch.selected_track_ids.iter());
        self.last_context = Some(batch.context.clone());
        self.next_index = batch.next_index;
        self.updated_at = Utc::now();
    }
}

/// Abstract per-session blob store. Implementations overwrite whole
/// states; retention and expiry are someone else's policy.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the state for `session_id`, falling back to empty defaults
    /// when the session is unknown or its blob cannot be read.
    async fn load(&self, session_id: &str) -> ContinuationState;

    /// Persist the state for `session_id`, replacing any previous blob.
    async fn save(&self, session_id: &str, state: &ContinuationState);
}
