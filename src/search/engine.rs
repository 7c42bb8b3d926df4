//! The intent-specific search operations and "more" continuation.
//!
//! Each operation builds its query, runs the paginated driver against the
//! catalog, and tags the outcome with a replayable context. The caller
//! owns the exclusion set; on success it is updated with exactly the ids
//! of the returned batch, on error it is left untouched.

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::MusicCatalog;
use crate::search::driver::collect_unique;
use crate::search::errors::SearchError;
use crate::search::moods::genre_for_mood;
use crate::search::types::{SearchBatch, SearchContext, SearchKind, SearchOptions};

pub struct SearchEngine {
    catalog: Arc<dyn MusicCatalog>,
}

impl SearchEngine {
    pub fn new(catalog: Arc<dyn MusicCatalog>) -> Self {
        Self { catalog }
    }

    /// Run the driver on a working copy of `exclude` and commit the copy
    /// back only when the search succeeds.
    async fn run(
        &self,
        query: &str,
        context: SearchContext,
        exclude: &mut HashSet<u64>,
        options: &SearchOptions,
    ) -> Result<SearchBatch, SearchError> {
        let mut working = exclude.clone();
        let collected =
            collect_unique(self.catalog.as_ref(), query, &mut working, options).await?;
        *exclude = working;

        let selected_track_ids: Vec<u64> =
            collected.tracks.iter().filter_map(|t| t.id).collect();

        Ok(SearchBatch {
            tracks: collected.tracks,
            selected_track_ids,
            context,
            next_index: collected.next_index,
        })
    }

    /// Search by track title, biased to the title field.
    pub async fn search_by_track(
        &self,
        track_title: &str,
        exclude: &mut HashSet<u64>,
        options: &SearchOptions,
    ) -> Result<SearchBatch, SearchError> {
        let title = track_title.trim();
        let query = format!("track:\"{}\"", title);
        self.run(
            &query,
            SearchContext::new(SearchKind::Track, title),
            exclude,
            options,
        )
        .await
    }

    /// Search by genre, biased to the genre field.
    pub async fn search_by_genre(
        &self,
        genre: &str,
        exclude: &mut HashSet<u64>,
        options: &SearchOptions,
    ) -> Result<SearchBatch, SearchError> {
        let query = format!("genre:\"{}\"", genre);
        self.run(
            &query,
            SearchContext::new(SearchKind::Genre, genre),
            exclude,
            options,
        )
        .await
    }

    /// Search by mood keyword as free text. The least precise path;
    /// prefer `search_by_mood_with_genre_fallback`.
    pub async fn search_by_mood(
        &self,
        mood: &str,
        exclude: &mut HashSet<u64>,
        options: &SearchOptions,
    ) -> Result<SearchBatch, SearchError> {
        let normalized = mood.trim().to_lowercase();
        let context = SearchContext::new(SearchKind::Mood, normalized.clone());
        self.run(&normalized, context, exclude, options).await
    }

    /// Search by mood, trying the mapped genre first.
    ///
    /// A mapped mood whose genre search succeeds comes back tagged as a
    /// genre context, so "more" continues down the genre path. On no
    /// mapping, or any genre-path failure, falls back to the plain mood
    /// search.
    pub async fn search_by_mood_with_genre_fallback(
        &self,
        mood: &str,
        exclude: &mut HashSet<u64>,
        options: &SearchOptions,
    ) -> Result<SearchBatch, SearchError> {
        let normalized = mood.trim().to_lowercase();

        if let Some(genre) = genre_for_mood(&normalized) {
            match self.search_by_genre(genre, exclude, options).await {
                Ok(batch) => return Ok(batch),
                Err(e) => {
                    log::info!(
                        "genre fallback for mood {:?} ({}) came up empty: {}; trying mood search",
                        normalized,
                        genre,
                        e
                    );
                }
            }
        }

        self.search_by_mood(&normalized, exclude, options).await
    }

    /// Two-phase artist search: resolve the free-text name to the
    /// catalog's canonical spelling, then search tracks biased to that
    /// artist. The canonical name is what lands in the context, so a
    /// follow-up "more" reuses the corrected spelling, not the input.
    pub async fn search_by_artist(
        &self,
        artist_name: &str,
        exclude: &mut HashSet<u64>,
        options: &SearchOptions,
    ) -> Result<SearchBatch, SearchError> {
        let resolved = self.catalog.resolve_artist(artist_name).await?;

        let Some(artist) = resolved else {
            return Err(SearchError::ArtistNotFound(artist_name.to_string()));
        };

        if artist.name != artist_name {
            log::debug!("artist {:?} resolved to {:?}", artist_name, artist.name);
        }

        self.artist_tracks(&artist.name, exclude, options).await
    }

    /// Artist-biased track search with an already-canonical name.
    async fn artist_tracks(
        &self,
        canonical_name: &str,
        exclude: &mut HashSet<u64>,
        options: &SearchOptions,
    ) -> Result<SearchBatch, SearchError> {
        let query = format!("artist:\"{}\"", canonical_name);
        self.run(
            &query,
            SearchContext::new(SearchKind::Artist, canonical_name),
            exclude,
            options,
        )
        .await
    }

    /// Replay the operation recorded in `context` to satisfy a "more"
    /// request. The stored value is already resolved, so the artist path
    /// skips the resolution round-trip.
    pub async fn continue_from(
        &self,
        context: &SearchContext,
        exclude: &mut HashSet<u64>,
        options: &SearchOptions,
    ) -> Result<SearchBatch, SearchError> {
        log::debug!(
            "continuing {} search for {:?} at index {}",
            context.kind.as_str(),
            context.value,
            options.start_index
        );

        match context.kind {
            SearchKind::Artist => self.artist_tracks(&context.value, exclude, options).await,
            SearchKind::Genre => self.search_by_genre(&context.value, exclude, options).await,
            SearchKind::Mood => self.search_by_mood(&context.value, exclude, options).await,
            SearchKind::Track => self.search_by_track(&context.value, exclude, options).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::{track, ScriptedCatalog};
    use crate::catalog::CatalogError;

    fn engine(catalog: ScriptedCatalog) -> (SearchEngine, Arc<ScriptedCatalog>) {
        let catalog = Arc::new(catalog);
        (SearchEngine::new(catalog.clone()), catalog)
    }

    fn default_opts() -> SearchOptions {
        SearchOptions::default()
    }

    #[tokio::test]
    async fn genre_search_tags_context_and_ids() {
        let (engine, catalog) =
            engine(ScriptedCatalog::new(vec![Ok((1..=5).map(track).collect())]));
        let mut exclude = HashSet::new();

        let batch = engine
            .search_by_genre("jazz", &mut exclude, &default_opts())
            .await
            .unwrap();

        assert_eq!(batch.context, SearchContext::new(SearchKind::Genre, "jazz"));
        assert_eq!(batch.selected_track_ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(batch.next_index, 50);
        assert_eq!(catalog.queries(), vec!["genre:\"jazz\"".to_string()]);
        assert_eq!(exclude, HashSet::from([1, 2, 3, 4, 5]));
    }

    #[tokio::test]
    async fn track_search_trims_title_into_context() {
        let (engine, catalog) =
            engine(ScriptedCatalog::new(vec![Ok((1..=5).map(track).collect())]));
        let mut exclude = HashSet::new();

        let batch = engine
            .search_by_track("  Yesterday ", &mut exclude, &default_opts())
            .await
            .unwrap();

        assert_eq!(
            batch.context,
            SearchContext::new(SearchKind::Track, "Yesterday")
        );
        assert_eq!(catalog.queries(), vec!["track:\"Yesterday\"".to_string()]);
    }

    #[tokio::test]
    async fn mood_search_normalizes_value() {
        let (engine, catalog) =
            engine(ScriptedCatalog::new(vec![Ok((1..=5).map(track).collect())]));
        let mut exclude = HashSet::new();

        let batch = engine
            .search_by_mood("  Breezy ", &mut exclude, &default_opts())
            .await
            .unwrap();

        assert_eq!(batch.context, SearchContext::new(SearchKind::Mood, "breezy"));
        assert_eq!(catalog.queries(), vec!["breezy".to_string()]);
    }

    #[tokio::test]
    async fn artist_search_uses_corrected_name() {
        let (engine, catalog) = engine(
            ScriptedCatalog::new(vec![Ok((1..=5).map(track).collect())]).with_artist("Adele"),
        );
        let mut exclude = HashSet::new();

        let batch = engine
            .search_by_artist("Adel", &mut exclude, &default_opts())
            .await
            .unwrap();

        assert_eq!(
            batch.context,
            SearchContext::new(SearchKind::Artist, "Adele")
        );
        assert_eq!(catalog.resolutions.lock().as_slice(), ["Adel"]);
        assert_eq!(catalog.queries(), vec!["artist:\"Adele\"".to_string()]);
    }

    #[tokio::test]
    async fn unresolved_artist_names_original_input() {
        let (engine, catalog) = engine(ScriptedCatalog::new(vec![Ok(vec![track(1)])]));
        let mut exclude = HashSet::new();

        let err = engine
            .search_by_artist("Zzyzzx", &mut exclude, &default_opts())
            .await
            .unwrap_err();

        match err {
            SearchError::ArtistNotFound(name) => assert_eq!(name, "Zzyzzx"),
            other => panic!("unexpected error: {:?}", other),
        }
        // Resolution failed before any track search could run.
        assert_eq!(catalog.search_count(), 0);
    }

    #[tokio::test]
    async fn mapped_mood_with_genre_hits_never_queries_mood_text() {
        let (engine, catalog) =
            engine(ScriptedCatalog::new(vec![Ok((1..=5).map(track).collect())]));
        let mut exclude = HashSet::new();

        let batch = engine
            .search_by_mood_with_genre_fallback("Happy", &mut exclude, &default_opts())
            .await
            .unwrap();

        // Tagged as genre so "more" continues the genre search.
        assert_eq!(batch.context, SearchContext::new(SearchKind::Genre, "pop"));
        assert_eq!(catalog.queries(), vec!["genre:\"pop\"".to_string()]);
    }

    #[tokio::test]
    async fn empty_genre_results_fall_back_to_mood_text() {
        // Genre pages are dry; mood free-text finds a full batch.
        let (engine, catalog) = engine(ScriptedCatalog::new(vec![
            Ok(vec![]),
            Ok((7..=11).map(track).collect()),
        ]));
        let mut exclude = HashSet::new();

        let batch = engine
            .search_by_mood_with_genre_fallback("happy", &mut exclude, &default_opts())
            .await
            .unwrap();

        assert_eq!(batch.context, SearchContext::new(SearchKind::Mood, "happy"));
        assert_eq!(
            catalog.queries(),
            vec!["genre:\"pop\"".to_string(), "happy".to_string()]
        );
        assert_eq!(exclude, HashSet::from([7, 8, 9, 10, 11]));
    }

    #[tokio::test]
    async fn unmapped_mood_goes_straight_to_mood_text() {
        let (engine, catalog) =
            engine(ScriptedCatalog::new(vec![Ok((1..=5).map(track).collect())]));
        let mut exclude = HashSet::new();

        let batch = engine
            .search_by_mood_with_genre_fallback("wistful", &mut exclude, &default_opts())
            .await
            .unwrap();

        assert_eq!(batch.context, SearchContext::new(SearchKind::Mood, "wistful"));
        assert_eq!(catalog.queries(), vec!["wistful".to_string()]);
    }

    #[tokio::test]
    async fn continuation_replays_artist_without_re_resolution() {
        let (engine, catalog) = engine(
            ScriptedCatalog::new(vec![Ok(vec![track(11), track(12)])]).with_artist("Adele"),
        );
        let mut exclude = HashSet::from([1, 2, 3, 4, 5]);

        let context = SearchContext::new(SearchKind::Artist, "Adele");
        let batch = engine
            .continue_from(&context, &mut exclude, &SearchOptions::resume_at(50))
            .await
            .unwrap();

        assert!(catalog.resolutions.lock().is_empty());
        // Two unique tracks on the page force a scan of the next one;
        // both fetches reuse the corrected name and resume at the
        // stored offset.
        assert_eq!(
            catalog.queries(),
            vec!["artist:\"Adele\"".to_string(), "artist:\"Adele\"".to_string()]
        );
        assert_eq!(catalog.searches.lock()[0].2, 50);
        assert_eq!(catalog.searches.lock()[1].2, 100);
        assert_eq!(batch.selected_track_ids, vec![11, 12]);
    }

    #[tokio::test]
    async fn continuation_excludes_previously_seen_ids() {
        let (engine, _catalog) = engine(ScriptedCatalog::new(vec![Ok(vec![
            track(1),
            track(2),
            track(6),
        ])]));
        let mut exclude = HashSet::from([1, 2]);

        let context = SearchContext::new(SearchKind::Genre, "jazz");
        let batch = engine
            .continue_from(&context, &mut exclude, &SearchOptions::resume_at(50))
            .await
            .unwrap();

        assert_eq!(batch.selected_track_ids, vec![6]);
    }

    #[tokio::test]
    async fn failed_search_leaves_exclusion_set_untouched() {
        let (engine, _catalog) = engine(ScriptedCatalog::new(vec![
            Ok(vec![track(1), track(2)]),
            Err(CatalogError::Network("HTTP 503".to_string())),
        ]));
        let mut exclude = HashSet::new();

        let err = engine
            .search_by_genre("jazz", &mut exclude, &default_opts())
            .await
            .unwrap_err();

        assert!(matches!(err, SearchError::Upstream(_)));
        assert!(exclude.is_empty());
    }
}
