//! snake_case / camelCase conversion
//!
//! Only ASCII letters take part in a conversion; everything else passes
//! through. The two directions are not exact inverses for inputs with digits,
//! leading or trailing underscores, or runs of capitals.

use serde_json::{Map, Value};

/// Turn `blah_blah_blah` into `blahBlahBlah`.
///
/// Each `_` directly followed by an ASCII lowercase letter is dropped and the
/// letter upper-cased. Matches are taken left to right without overlap.
pub fn camelize(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(next) if c == '_' && next.is_ascii_lowercase() => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }

    result
}

/// Turn `blahBlahBlah` into `blah_blah_blah`.
///
/// An ASCII lowercase letter directly followed by an ASCII uppercase letter
/// gets an `_` in between, and the uppercase letter is lower-cased.
pub fn underscore(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + input.len() / 4);
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        result.push(c);
        if let Some(next) = chars.peek() {
            if c.is_ascii_lowercase() && next.is_ascii_uppercase() {
                result.push('_');
                result.push(next.to_ascii_lowercase());
                chars.next();
            }
        }
    }

    result
}

/// Rename every record key in a JSON tree with [`camelize`]
pub fn camelize_keys(value: &Value) -> Value {
    rename_keys(value, &camelize)
}

/// Rename every record key in a JSON tree with [`underscore`]
pub fn underscore_keys(value: &Value) -> Value {
    rename_keys(value, &underscore)
}

fn rename_keys(value: &Value, rename: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(record) => {
            let mut renamed = Map::with_capacity(record.len());
            for (key, val) in record {
                renamed.insert(rename(key), rename_keys(val, rename));
            }
            Value::Object(renamed)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| rename_keys(item, rename))
                .collect(),
        ),
        other => other.clone(),
    }
}
