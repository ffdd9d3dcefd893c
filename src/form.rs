//! Stripe's bracketed form encoding: `card[exp_month]=12`, `expand[0]=customer`.

use displaydoc::Display;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Display, Error)]
pub enum Error {
    /// Failed to serialize parameters: {0}
    Serialize(#[from] serde_json::Error),
    /// Parameters must serialize to an object, not {0}.
    NotAnObject(&'static str),
    /// Failed to url-encode parameters: {0}
    UrlEncode(#[from] serde_urlencoded::ser::Error),
}

/// Joins key parts as `first[second][third]`.
pub fn format_key(parts: &[String]) -> String {
    let mut parts = parts.iter();
    let mut key = parts.next().cloned().unwrap_or_default();
    for part in parts {
        key.push('[');
        key.push_str(part);
        key.push(']');
    }
    key
}

/// Flattens parameters into ordered `(key, value)` pairs.
///
/// `None` fields vanish, an explicitly empty list becomes `key=` so the API
/// clears it, and object keys come out sorted.
pub fn to_pairs<P: Serialize + ?Sized>(params: &P) -> Result<Vec<(String, String)>, Error> {
    let mut pairs = Vec::new();
    match serde_json::to_value(params)? {
        Value::Object(map) => {
            let mut parts = Vec::new();
            for (key, value) in sorted(&map) {
                parts.push(key.clone());
                append(&mut pairs, &mut parts, value);
                parts.pop();
            }
        }
        Value::Null => {}
        Value::Bool(_) => return Err(Error::NotAnObject("a boolean")),
        Value::Number(_) => return Err(Error::NotAnObject("a number")),
        Value::String(_) => return Err(Error::NotAnObject("a string")),
        Value::Array(_) => return Err(Error::NotAnObject("an array")),
    }
    Ok(pairs)
}

/// Encodes parameters as an `application/x-www-form-urlencoded` string.
pub fn encode<P: Serialize + ?Sized>(params: &P) -> Result<String, Error> {
    Ok(serde_urlencoded::to_string(to_pairs(params)?)?)
}

fn sorted(map: &serde_json::Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

fn append(pairs: &mut Vec<(String, String)>, parts: &mut Vec<String>, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => pairs.push((format_key(parts), flag.to_string())),
        Value::Number(number) => pairs.push((format_key(parts), number.to_string())),
        Value::String(text) => pairs.push((format_key(parts), text.clone())),
        Value::Array(items) if items.is_empty() => pairs.push((format_key(parts), String::new())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                parts.push(index.to_string());
                append(pairs, parts, item);
                parts.pop();
            }
        }
        Value::Object(map) => {
            for (key, item) in sorted(map) {
                parts.push(key.clone());
                append(pairs, parts, item);
                parts.pop();
            }
        }
    }
}
