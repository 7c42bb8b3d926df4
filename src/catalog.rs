//! Seam between the selection engine and the upstream music source.
//!
//! The engine only talks to a `MusicCatalog`; the real implementation
//! lives in `deezer::DeezerClient`, and tests script their own.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::models::{ResolvedArtist, Track};

#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum CatalogError {
    /// Transport failure, timeout, or a non-2xx status from the upstream.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

#[async_trait]
pub trait MusicCatalog: Send + Sync {
    /// Fetch one page of track results for `query`, `limit` entries
    /// starting at offset `index`. An empty page signals end of data.
    async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
        index: usize,
    ) -> Result<Vec<Track>, CatalogError>;

    /// Resolve a free-text artist name to its canonical catalog entry.
    /// `Ok(None)` means the upstream had no candidate at all.
    async fn resolve_artist(&self, name: &str) -> Result<Option<ResolvedArtist>, CatalogError>;
}
