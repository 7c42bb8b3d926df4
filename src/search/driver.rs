//! Paginated collection loop.
//!
//! Turns the upstream's paged, duplicate-prone result stream into at most
//! `desired_count` unseen tracks, scanning further pages only as long as
//! the filter keeps coming up short.

use std::collections::HashSet;

use crate::catalog::MusicCatalog;
use crate::models::Track;
use crate::search::dedup::pick_unique_tracks;
use crate::search::errors::SearchError;
use crate::search::types::SearchOptions;

/// Tracks collected by one driver run, plus the offset a continuation
/// should resume from: always just past the last page fetched, whether
/// or not all of that page's tracks were used.
#[derive(Debug)]
pub struct Collected {
    pub tracks: Vec<Track>,
    pub next_index: usize,
}

/// Fetch pages starting at `options.start_index` until `desired_count`
/// unseen tracks are selected, the upstream runs dry, or the page budget
/// is spent. A dry/spent run with at least one track is still success;
/// with none it is `NoNewTracks`. Any transport or decode failure
/// short-circuits immediately, discarding tracks collected so far.
///
/// `exclude` is mutated as pages are scanned, so a run that ends in an
/// error leaves the ids picked before the failure in the set. The engine
/// hands this loop a working copy and commits it only on success.
pub async fn collect_unique(
    catalog: &dyn MusicCatalog,
    query: &str,
    exclude: &mut HashSet<u64>,
    options: &SearchOptions,
) -> Result<Collected, SearchError> {
    let mut selected: Vec<Track> = Vec::new();
    let mut index = options.start_index;

    for page_no in 0..options.max_pages {
        let page = catalog
            .search_tracks(query, options.page_size, index)
            .await?;
        index += options.page_size;

        if page.is_empty() {
            log::debug!(
                "query {:?}: upstream dry after {} page(s), {} selected",
                query,
                page_no + 1,
                selected.len()
            );
            break;
        }

        let need = options.desired_count - selected.len();
        selected.extend(pick_unique_tracks(page, exclude, need));

        if selected.len() >= options.desired_count {
            break;
        }
        // Not enough new tracks after filtering; scan the next page.
    }

    if selected.is_empty() {
        return Err(SearchError::NoNewTracks);
    }

    log::debug!(
        "query {:?}: selected {}/{} track(s), next_index={}",
        query,
        selected.len(),
        options.desired_count,
        index
    );

    Ok(Collected {
        tracks: selected,
        next_index: index,
    })
}
