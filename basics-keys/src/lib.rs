//! Key-existence validation.
//!
//! [`validate_keys`] answers whether every [`Key`] in a list names a property
//! of an object. Anything that can answer "do you have a property called
//! this?" implements [`PropertySource`]; JSON values and string-keyed maps do
//! out of the box.
//!
//! Only presence matters. A property whose value is `null` still exists.

mod error;
mod key;
mod source;
mod validate;

pub use error::{KeysError, KeysResult};
pub use key::Key;
pub use source::PropertySource;
pub use validate::{missing_keys, validate_keys, validate_keys_of};
