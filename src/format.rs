//! User-facing rendering of a selected track batch.

use crate::models::Track;

const NO_SONGS_MESSAGE: &str = "Sorry, I couldn't find any songs for your request.";

/// Render already-selected tracks as a markdown table, one row per
/// track. Selection and repeat-filtering happen before this; the
/// formatter only draws what it is given. Absent fields degrade to
/// placeholders instead of failing.
pub fn format_tracks(tracks: &[Track]) -> String {
    if tracks.is_empty() {
        return NO_SONGS_MESSAGE.to_string();
    }

    let mut out = String::from("Here are some songs for you:\n\n");
    out.push_str("| Title | Artist | Listen |\n");
    out.push_str("| --- | --- | --- |\n");

    for track in tracks {
        let title = track.title.as_deref().unwrap_or("Unknown Title");
        let artist = track.artist_name().unwrap_or("Unknown Artist");
        let link = track.link.as_deref().unwrap_or("#");
        out.push_str(&format!(
            "| {} | {} | [Listen]({}) |\n",
            title, artist, link
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::{idless_track, track};
    use crate::models::{Track, TrackArtist};

    #[test]
    fn empty_batch_is_exactly_the_fixed_sentence() {
        assert_eq!(
            format_tracks(&[]),
            "Sorry, I couldn't find any songs for your request."
        );
    }

    #[test]
    fn renders_one_row_per_track() {
        let rendered = format_tracks(&[track(1), track(2)]);

        assert!(rendered.starts_with("Here are some songs for you:"));
        assert!(rendered.contains("| Title | Artist | Listen |"));
        assert!(rendered.contains("| Track 1 | Artist 1 | [Listen](https://example.com/track/1) |"));
        assert!(rendered.contains("| Track 2 | Artist 2 | [Listen](https://example.com/track/2) |"));
        assert_eq!(rendered.lines().count(), 6);
    }

    #[test]
    fn absent_fields_degrade_to_placeholders() {
        let rendered = format_tracks(&[idless_track()]);
        assert!(rendered.contains("| No Id | Unknown Artist | [Listen](#) |"));

        let bare = Track {
            id: Some(1),
            title: None,
            artist: Some(TrackArtist {
                name: "Adele".to_string(),
            }),
            link: None,
        };
        let rendered = format_tracks(&[bare]);
        assert!(rendered.contains("| Unknown Title | Adele | [Listen](#) |"));
    }
}
