//! Profile record and partial updates.
//!
//! - [`Profile`]: a record with `name`, `age` and `email`, all required
//! - [`ProfilePatch`]: the same shape with every field optional
//! - [`update_profile`]: merges a patch over a profile into a new profile
//!
//! Merging never mutates its input and never removes a field.

mod error;
mod patch;
mod profile;

pub use error::{ProfileError, ProfileResult};
pub use patch::ProfilePatch;
pub use profile::{Profile, update_profile};
