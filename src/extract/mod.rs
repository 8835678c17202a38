//! Key-subset extraction from records

use serde_json::{Map, Value};

/// Copy the requested keys of `source` into a new record.
///
/// Only keys present on the source are copied; missing keys are left out.
/// The result follows the order of `keys`. A non-record source yields an
/// empty record.
///
/// # Examples
/// ```
/// use jsonkit::extract::extract;
/// use serde_json::json;
///
/// let picked = extract(&json!({"a": 1, "b": 2, "c": 3}), &["c", "a", "z"]);
/// assert_eq!(picked, json!({"c": 3, "a": 1}));
/// ```
pub fn extract<K: AsRef<str>>(source: &Value, keys: &[K]) -> Value {
    match source {
        Value::Object(record) => Value::Object(extract_map(record, keys)),
        _ => Value::Object(Map::new()),
    }
}

/// [`extract`] over a bare map
pub fn extract_map<K: AsRef<str>>(
    source: &Map<String, Value>,
    keys: &[K],
) -> Map<String, Value> {
    let mut result = Map::with_capacity(keys.len());

    for key in keys {
        let key = key.as_ref();
        if result.contains_key(key) {
            continue;
        }
        if let Some(value) = source.get(key) {
            result.insert(key.to_string(), value.clone());
        }
    }

    result
}
