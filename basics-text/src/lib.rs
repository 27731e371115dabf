//! Substring occurrence counting.
//!
//! - [`count_occurrences`]: counts (possibly overlapping) matches of a word
//!   in a lower-cased sentence
//! - [`CountOptions`] / [`CaseFolding`]: controls whether the search word is
//!   folded as well
//! - [`occurrence_positions`]: the match offsets behind a count

mod occurrences;
mod options;

pub use occurrences::{count_occurrences, count_occurrences_with, occurrence_positions};
pub use options::{CaseFolding, CountOptions};
