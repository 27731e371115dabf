use serde::{Deserialize, Serialize};

/// Which side of the search gets lower-cased before matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseFolding {
    /// Only the sentence is lower-cased. An upper-case letter in the word
    /// can therefore never match.
    #[default]
    Haystack,
    /// Both sentence and word are lower-cased.
    Both,
}

/// Options for occurrence counting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountOptions {
    pub case_folding: CaseFolding,
}

impl CountOptions {
    /// Options that fold both the sentence and the word.
    #[must_use]
    pub const fn case_insensitive() -> Self {
        Self {
            case_folding: CaseFolding::Both,
        }
    }
}
