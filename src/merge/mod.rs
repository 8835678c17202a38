//! Record merging ("extend")
//!
//! Copies the keys of one or more source records onto a target record, either
//! one level deep (shallow) or by recursively combining nested records (deep).

use serde_json::{Map, Value};
use tracing::debug;

/// Merge behaviour options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Recursively merge nested records instead of overwriting them
    pub deep: bool,
}

impl MergeOptions {
    pub fn shallow() -> Self {
        Self { deep: false }
    }

    pub fn deep() -> Self {
        Self { deep: true }
    }
}

/// Check whether a value is a structured record (a JSON object).
///
/// Arrays, null and primitives are not records.
pub fn is_record(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Merge every source record into `target`, later sources winning.
///
/// A non-record target is returned untouched and non-record sources are
/// skipped. Keys already on the target keep their position; new keys are
/// appended in the order they are first seen.
///
/// # Examples
/// ```
/// use jsonkit::merge::{merge, MergeOptions};
/// use serde_json::json;
///
/// let mut target = json!({"a": {"x": 1}});
/// merge(&mut target, &[json!({"a": {"y": 2}})], &MergeOptions::deep());
/// assert_eq!(target, json!({"a": {"x": 1, "y": 2}}));
/// ```
pub fn merge<'a, 'b, I>(
    target: &'a mut Value,
    sources: I,
    options: &MergeOptions,
) -> &'a mut Value
where
    I: IntoIterator<Item = &'b Value>,
{
    if let Value::Object(record) = target {
        for (index, source) in sources.into_iter().enumerate() {
            match source {
                Value::Object(incoming) => merge_record(record, incoming, options),
                _ => debug!(index, "skipping non-record merge source"),
            }
        }
    } else {
        debug!("merge target is not a record, leaving it unchanged");
    }

    target
}

/// Shallow merge: every key of every source overwrites the target's
pub fn merge_shallow<'a, 'b, I>(target: &'a mut Value, sources: I) -> &'a mut Value
where
    I: IntoIterator<Item = &'b Value>,
{
    merge(target, sources, &MergeOptions::shallow())
}

/// Deep merge: nested records are combined recursively
pub fn merge_deep<'a, 'b, I>(target: &'a mut Value, sources: I) -> &'a mut Value
where
    I: IntoIterator<Item = &'b Value>,
{
    merge(target, sources, &MergeOptions::deep())
}

fn merge_record(
    target: &mut Map<String, Value>,
    source: &Map<String, Value>,
    options: &MergeOptions,
) {
    for (key, incoming) in source {
        let merged = match target.get(key) {
            Some(existing) if options.deep && is_record(existing) && is_record(incoming) => {
                // Nested records are combined into a fresh record; neither input is mutated.
                let mut combined = Value::Object(Map::new());
                merge(&mut combined, [existing, incoming], options);
                combined
            }
            _ => incoming.clone(),
        };
        target.insert(key.clone(), merged);
    }
}
