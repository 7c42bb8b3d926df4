use serde::{Deserialize, Serialize};

/// One track record as returned by the upstream search source.
///
/// Forwarded as received, never mutated. Unknown upstream fields are
/// dropped on deserialization. `id` is the dedup key; a track without
/// one cannot be filtered safely and is skipped by selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<TrackArtist>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

impl Track {
    pub fn artist_name(&self) -> Option<&str> {
        self.artist.as_ref().map(|a| a.name.as_str())
    }
}

/// Canonical artist entry from the artist-resolution endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedArtist {
    pub name: String,
}
