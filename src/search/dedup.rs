use std::collections::HashSet;

use crate::models::Track;

/// Pick up to `need` tracks whose ids are not in `exclude`, preserving
/// upstream order. Every picked id is inserted into `exclude` before
/// returning, so a later call with the same set can never re-pick it.
/// Tracks without an id are skipped; they cannot be deduplicated.
pub fn pick_unique_tracks(
    candidates: Vec<Track>,
    exclude: &mut HashSet<u64>,
    need: usize,
) -> Vec<Track> {
    let mut picked = Vec::with_capacity(need.min(candidates.len()));

    for track in candidates {
        if picked.len() == need {
            break;
        }
        let Some(id) = track.id else {
            continue;
        };
        if !exclude.insert(id) {
            continue;
        }
        picked.push(track);
    }

    picked
}
