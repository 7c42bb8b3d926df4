//! Static mood → genre table.
//!
//! Genre search is more precise than free-text mood search, so the
//! fallback policy tries the mapped genre first. The table covers common
//! English mood expressions grouped into nine genre families; anything
//! not listed falls through to the plain mood query.

/// Look up the genre mapped to a mood phrase. Expects the mood already
/// normalized (trimmed + lowercased).
pub fn genre_for_mood(mood: &str) -> Option<&'static str> {
    MOOD_TO_GENRE
        .iter()
        .find(|(m, _)| *m == mood)
        .map(|(_, g)| *g)
}

const MOOD_TO_GENRE: &[(&str, &str)] = &[
    // Happy / Uplifting
    ("happy", "pop"),
    ("excited", "pop"),
    ("feeling great", "pop"),
    ("positive", "pop"),
    ("joyful", "pop"),
    ("in a good mood", "pop"),
    ("cheerful", "pop"),
    // Sad / Emotional
    ("sad", "blues"),
    ("feeling down", "blues"),
    ("blue", "blues"),
    ("heartbroken", "blues"),
    ("lonely", "blues"),
    ("depressed", "blues"),
    ("melancholy", "blues"),
    // Romantic / Loving
    ("romantic", "r&b"),
    ("in love", "r&b"),
    ("thinking about someone", "r&b"),
    ("longing", "r&b"),
    ("crush", "r&b"),
    ("passionate", "r&b"),
    // Calm / Relaxed
    ("relaxed", "jazz"),
    ("calm", "jazz"),
    ("peaceful", "jazz"),
    ("easygoing", "jazz"),
    ("laid back", "jazz"),
    ("need to unwind", "jazz"),
    // Spiritual / Uplifting
    ("spiritual", "religious"),
    ("uplifted", "religious"),
    ("soulful", "religious"),
    ("prayerful", "religious"),
    ("looking for meaning", "religious"),
    // Dramatic / Powerful
    ("dramatic", "classical"),
    ("emotional", "classical"),
    ("powerful", "classical"),
    ("inspired", "classical"),
    ("epic", "classical"),
    // Energetic / Workout
    ("energetic", "rock"),
    ("working out", "rock"),
    ("need motivation", "rock"),
    ("pumped", "rock"),
    ("ready to move", "rock"),
    // Angry / Tense
    ("angry", "metal"),
    ("furious", "metal"),
    ("mad", "metal"),
    ("frustrated", "metal"),
    ("tense", "metal"),
    // Chill / Mellow
    ("chill", "lo-fi"),
    ("chill vibes", "lo-fi"),
    ("laid-back", "lo-fi"),
    ("mellow", "lo-fi"),
    ("relaxing", "lo-fi"),
    ("breezy", "lo-fi"),
];
