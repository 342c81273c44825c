//! Tolerant field decoders for upstream documents.
//!
//! Upstream editors leave fields empty, send numbers where text is expected and the
//! other way around. Every decoder here reads the raw JSON value first and never
//! reports a type mismatch: a value that cannot be used becomes `None`, and list
//! elements that cannot be decoded are skipped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keys tried, in order, when a list of labels arrives as objects.
const LABEL_KEYS: &[&str] = &["name", "label", "value", "exchange", "title"];

/// Trimmed, non-empty text. Numbers and booleans are rendered as text.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(value_to_text(&raw))
}

/// Text kept exactly as sent, whitespace included. Used for rich-text leaves
/// where spacing between runs is significant.
pub fn raw_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// A number, accepting numeric strings with thousands separators.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite()))
}

/// A link, given either as a bare string or as an upload object with a `url` field.
pub fn url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match &raw {
        Value::Object(map) => map.get("url").and_then(value_to_text),
        other => value_to_text(other),
    })
}

/// Any nested value; `None` when it is null or does not match `T`.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(raw).ok())
}

/// A list of `T`; anything that is not an array yields an empty list and
/// undecodable elements are dropped.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Array(items) => items
            .into_iter()
            .filter(|item| !item.is_null())
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// A list of labels. Accepts `["NSE", "BSE"]`, `[{"name": "NSE"}]` or a single
/// comma separated string.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Array(items) => items.iter().filter_map(label_of).collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    })
}

pub(crate) fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn label_of(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => LABEL_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(value_to_text)),
        other => value_to_text(other),
    }
}
