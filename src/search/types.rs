//! Request and outcome types for the selection engine.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::Track;

/// What kind of search produced a batch. Stored in the session so a
/// follow-up "more" replays the same operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Artist,
    Genre,
    Mood,
    Track,
}

impl SearchKind {
    pub fn as_str(&self) -> &str {
        match self {
            SearchKind::Artist => "artist",
            SearchKind::Genre => "genre",
            SearchKind::Mood => "mood",
            SearchKind::Track => "track",
        }
    }
}

/// The replayable tag for a batch: which operation ran, and the resolved
/// value it ran with (canonical artist name, literal genre, normalized
/// mood, or normalized title), not the user's raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchContext {
    pub kind: SearchKind,
    pub value: String,
}

impl SearchContext {
    pub fn new(kind: SearchKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Per-request knobs. Defaults mirror the engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// How many unique tracks to return.
    pub desired_count: usize,
    /// Upstream page size per fetch.
    pub page_size: usize,
    /// Pagination offset to start from.
    pub start_index: usize,
    /// Maximum upstream fetches before giving up.
    pub max_pages: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            desired_count: config::DEFAULT_DESIRED_COUNT,
            page_size: config::DEFAULT_PAGE_SIZE,
            start_index: 0,
            max_pages: config::DEFAULT_MAX_PAGES,
        }
    }
}

impl SearchOptions {
    /// Options carrying the defaults of an engine configuration.
    pub fn from_config(config: &crate::config::EngineConfig) -> Self {
        Self {
            desired_count: config.default_desired_count,
            page_size: config.default_page_size,
            start_index: 0,
            max_pages: config.default_max_pages,
        }
    }

    /// Options for resuming a previous search at the given offset.
    pub fn resume_at(start_index: usize) -> Self {
        Self {
            start_index,
            ..Self::default()
        }
    }
}

/// Successful outcome of a search operation: up to `desired_count`
/// unique tracks, their ids, the tag to replay on "more", and the
/// offset the next continuation should start from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchBatch {
    pub tracks: Vec<Track>,
    pub selected_track_ids: Vec<u64>,
    pub context: SearchContext,
    pub next_index: usize,
}

impl SearchBatch {
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }
}
