use serde::{Deserialize, Serialize};

use crate::error::ProfileResult;
use crate::profile::Profile;

/// A partial [`Profile`]: `None` means "leave this field alone".
///
/// Serializes with absent fields omitted, so `{"age": 31}` round-trips as a
/// patch that only touches `age`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfilePatch {
    /// An empty patch; applying it yields an equal profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name to overwrite.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the age to overwrite.
    #[must_use]
    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Sets the email to overwrite.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns true if the patch provides no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.email.is_none()
    }

    /// Parses a patch from a JSON object. Omitted fields stay unset;
    /// unknown fields are rejected.
    pub fn from_json(json: &str) -> ProfileResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Profile> for ProfilePatch {
    fn from(profile: Profile) -> Self {
        Self {
            name: Some(profile.name),
            age: Some(profile.age),
            email: Some(profile.email),
        }
    }
}
