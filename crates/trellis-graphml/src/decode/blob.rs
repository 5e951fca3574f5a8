//! Extension blobs (`d_nodeData`, `d_edgeData`).
//!
//! A blob must be a JSON object. Keys the editor knows are checked like their
//! `<data>` counterparts and dropped one by one when they fail; every other
//! key lands in `extra` untouched.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub(super) type Blob = Map<String, Value>;

/// Parses `text` as a JSON object. Syntax errors and non-objects yield `None`.
pub(super) fn parse_object(text: &str) -> Option<Blob> {
    match serde_json::from_str(text).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Deserializes a well-known value.
///
/// `None` when the value has the wrong type or fails validation, `Some(None)`
/// for JSON `null`.
pub(super) fn typed<T: DeserializeOwned>(value: Value) -> Option<Option<T>> {
    serde_json::from_value(value).ok()
}

/// Like [`typed`], additionally requiring a finite number greater than zero.
pub(super) fn positive(value: Value) -> Option<Option<f64>> {
    typed::<f64>(value).filter(|width| width.is_none_or(|w| w.is_finite() && w > 0.0))
}

/// Stores a checked value, leaving the slot alone for `null`.
///
/// Returns `false` when the value was rejected.
pub(super) fn assign<T>(slot: &mut Option<T>, checked: Option<Option<T>>) -> bool {
    let Some(value) = checked else {
        return false;
    };
    if value.is_some() {
        *slot = value;
    }
    true
}
