use serde::Serialize;
use tracing::debug;

use crate::error::KeysResult;
use crate::key::Key;
use crate::source::PropertySource;

/// Returns true if every key names an existing property of `obj`.
///
/// An empty key list is always valid. Stops at the first missing key.
pub fn validate_keys<O: PropertySource + ?Sized>(obj: &O, keys: &[Key]) -> bool {
    keys.iter().all(|key| {
        let present = obj.has_property(&key.property_name());
        if !present {
            debug!(%key, "key not present");
        }
        present
    })
}

/// Returns the keys that do not name a property of `obj`, in input order.
pub fn missing_keys<'k, O: PropertySource + ?Sized>(obj: &O, keys: &'k [Key]) -> Vec<&'k Key> {
    keys.iter()
        .filter(|key| !obj.has_property(&key.property_name()))
        .collect()
}

/// Validates keys against the JSON form of any serializable value.
///
/// Struct fields become object properties, so a field holding `None` is
/// still present (it serializes as `null`) unless the type skips it.
pub fn validate_keys_of<T: Serialize + ?Sized>(value: &T, keys: &[Key]) -> KeysResult<bool> {
    let json = serde_json::to_value(value)?;
    Ok(validate_keys(&json, keys))
}
