use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::patch::ProfilePatch;

/// A user profile. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub email: String,
}

impl Profile {
    /// Creates a profile from its three fields.
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// Returns a new profile with the fields present in `updates` replaced.
    #[must_use]
    pub fn with_updates(&self, updates: &ProfilePatch) -> Self {
        update_profile(self, updates)
    }
}

/// Merges `updates` over `base`.
///
/// Fields present in the patch win; everything else is copied from `base`.
/// `base` is left untouched.
#[must_use]
pub fn update_profile(base: &Profile, updates: &ProfilePatch) -> Profile {
    debug!(
        name = updates.name.is_some(),
        age = updates.age.is_some(),
        email = updates.email.is_some(),
        "applying profile patch"
    );

    Profile {
        name: updates.name.clone().unwrap_or_else(|| base.name.clone()),
        age: updates.age.unwrap_or(base.age),
        email: updates.email.clone().unwrap_or_else(|| base.email.clone()),
    }
}
