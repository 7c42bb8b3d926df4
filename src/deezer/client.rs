use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::catalog::{CatalogError, MusicCatalog};
use crate::config::EngineConfig;
use crate::models::{ResolvedArtist, Track};

/// Envelope every Deezer search endpoint wraps its results in.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

pub struct DeezerClient {
    client: Client,
    search_url: String,
    artist_search_url: String,
}

impl DeezerClient {
    pub fn new(config: &EngineConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            search_url: config.search_url.clone(),
            artist_search_url: config.artist_search_url.clone(),
        })
    }

    async fn get_envelope<T>(
        &self,
        url: &str,
        params: &[(&str, String)],
        operation: &str,
    ) -> Result<Vec<T>, CatalogError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} failed: HTTP {} from {}", operation, status, url);
            return Err(CatalogError::Network(format!("HTTP {}", status)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let envelope: DataEnvelope<T> = serde_json::from_str(&text)
            .map_err(|e| CatalogError::Parse(format!("{} response: {}", operation, e)))?;

        Ok(envelope.data)
    }
}

#[async_trait::async_trait]
impl MusicCatalog for DeezerClient {
    async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
        index: usize,
    ) -> Result<Vec<Track>, CatalogError> {
        log::debug!(
            "search_tracks q={:?} limit={} index={}",
            query,
            limit,
            index
        );

        let params = [
            ("q", query.to_string()),
            ("limit", limit.to_string()),
            ("index", index.to_string()),
        ];

        self.get_envelope(&self.search_url, &params, "search_tracks")
            .await
    }

    async fn resolve_artist(&self, name: &str) -> Result<Option<ResolvedArtist>, CatalogError> {
        log::debug!("resolve_artist q={:?}", name);

        let params = [("q", name.to_string())];
        let mut candidates: Vec<ResolvedArtist> = self
            .get_envelope(&self.artist_search_url, &params, "resolve_artist")
            .await?;

        if candidates.is_empty() {
            return Ok(None);
        }
        Ok(Some(candidates.remove(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_parses_track_payload() {
        let body = r#"{
            "data": [
                {"id": 3135556, "title": "Harder, Better, Faster, Stronger",
                 "link": "https://www.deezer.com/track/3135556",
                 "artist": {"id": 27, "name": "Daft Punk"},
                 "album": {"id": 302127}}
            ],
            "total": 1
        }"#;

        let envelope: DataEnvelope<Track> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.len(), 1);
        let track = &envelope.data[0];
        assert_eq!(track.id, Some(3135556));
        assert_eq!(track.artist_name(), Some("Daft Punk"));
    }

    #[test]
    fn envelope_tolerates_missing_data_key() {
        let envelope: DataEnvelope<Track> = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn envelope_tolerates_partial_tracks() {
        // Tracks may come back without id or artist; the models keep them
        // optional so one malformed entry doesn't sink the whole page.
        let body = r#"{"data": [{"title": "Mystery"}]}"#;
        let envelope: DataEnvelope<Track> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data[0].id, None);
        assert!(envelope.data[0].artist.is_none());
    }
}
