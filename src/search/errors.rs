use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors a search operation can surface to the caller.
///
/// A page budget that runs out with at least one unique track found is
/// not an error; the operation returns the short batch as success.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum SearchError {
    /// The upstream API was unreachable, timed out, or answered with a
    /// failure. Never retried here.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Artist resolution found no candidate for the caller's input.
    #[error("No artist matching '{0}'")]
    ArtistNotFound(String),

    /// The search exhausted its budget (or the upstream ran dry) without
    /// yielding a single unseen track.
    #[error("No new tracks found after filtering repeats")]
    NoNewTracks,
}

impl SearchError {
    /// The fixed sentence shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Upstream(_) => {
                "Sorry, I couldn't process your request right now. Please try again later."
                    .to_string()
            }
            SearchError::ArtistNotFound(name) => {
                format!("Sorry, I couldn't find an artist matching '{}'.", name)
            }
            SearchError::NoNewTracks => {
                "Sorry, no new songs found matching your search (after filtering repeats)."
                    .to_string()
            }
        }
    }
}

impl From<CatalogError> for SearchError {
    fn from(err: CatalogError) -> Self {
        SearchError::Upstream(err.to_string())
    }
}
