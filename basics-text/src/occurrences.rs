use std::borrow::Cow;

use tracing::debug;

use crate::options::{CaseFolding, CountOptions};

/// Counts how often `word` occurs in `sentence`.
///
/// The sentence is lower-cased, the word is taken as given, so
/// `count_occurrences("The cat", "The")` is `0`. Overlapping matches are
/// counted: `count_occurrences("aaaa", "aa")` is `3`. An empty word yields `0`.
#[must_use]
pub fn count_occurrences(sentence: &str, word: &str) -> usize {
    count_occurrences_with(sentence, word, &CountOptions::default())
}

/// Counts occurrences of `word` in `sentence` using explicit options.
#[must_use]
pub fn count_occurrences_with(sentence: &str, word: &str, options: &CountOptions) -> usize {
    occurrence_positions(sentence, word, options).len()
}

/// Returns the byte offset of every match start in the lower-cased sentence.
///
/// Offsets index into `sentence.to_lowercase()`, which can differ in length
/// from `sentence` for some non-ASCII input.
#[must_use]
pub fn occurrence_positions(sentence: &str, word: &str, options: &CountOptions) -> Vec<usize> {
    if word.is_empty() {
        debug!("empty search word, reporting no occurrences");
        return Vec::new();
    }

    let haystack = sentence.to_lowercase();
    let needle: Cow<'_, str> = match options.case_folding {
        CaseFolding::Haystack => Cow::Borrowed(word),
        CaseFolding::Both => Cow::Owned(word.to_lowercase()),
    };

    let mut positions = Vec::new();
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(&*needle) {
        let index = from + offset;
        positions.push(index);
        // Resume one character past the match start, not past its end.
        let step = haystack[index..].chars().next().map_or(1, char::len_utf8);
        from = index + step;
    }

    debug!(matches = positions.len(), "counted occurrences");
    positions
}
