use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A property key: a name or an integer index.
///
/// An index refers to the property named by its decimal form, so
/// `Key::Index(0)` and `Key::Name("0".into())` look up the same property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    /// The property name this key looks up.
    #[must_use]
    pub fn property_name(&self) -> Cow<'_, str> {
        match self {
            Self::Name(name) => Cow::Borrowed(name),
            Self::Index(index) => Cow::Owned(index.to_string()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.property_name())
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<u32> for Key {
    fn from(index: u32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        // Indices past i64::MAX cannot name a real property; render them by name.
        i64::try_from(index).map_or_else(|_| Self::Name(index.to_string()), Self::Index)
    }
}
