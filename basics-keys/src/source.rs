use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

/// Something whose properties can be looked up by name.
pub trait PropertySource {
    /// Returns true if a property called `name` exists, whatever its value.
    fn has_property(&self, name: &str) -> bool;
}

impl PropertySource for Map<String, Value> {
    fn has_property(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

/// Objects expose their keys. Arrays and strings expose `length` and every
/// in-bounds index. Other values have no properties.
impl PropertySource for Value {
    fn has_property(&self, name: &str) -> bool {
        match self {
            Value::Object(map) => map.has_property(name),
            Value::Array(items) => name == "length" || is_index_below(name, items.len()),
            Value::String(text) => name == "length" || is_index_below(name, text.chars().count()),
            Value::Null | Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

impl<V, S: BuildHasher> PropertySource for HashMap<String, V, S> {
    fn has_property(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl<V> PropertySource for BTreeMap<String, V> {
    fn has_property(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl<T: PropertySource + ?Sized> PropertySource for &T {
    fn has_property(&self, name: &str) -> bool {
        (**self).has_property(name)
    }
}

/// True if `name` is the canonical decimal form of an index below `len`.
/// `"01"` and `"+1"` are names, not indices.
fn is_index_below(name: &str, len: usize) -> bool {
    name.parse::<usize>()
        .is_ok_and(|index| index < len && index.to_string() == name)
}
