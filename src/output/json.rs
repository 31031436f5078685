//! JSON emission for tool results.

use serde::Serialize;
use serde_json::Value;

/// Convert a result model to a JSON value.
///
/// All result models serialize infallibly; a failure here means a broken
/// model, not bad user input.
pub fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| panic!("Error serializing result: {e}"))
}

/// Pretty-printed JSON text for a result model.
pub fn to_pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| panic!("Error serializing result: {e}"))
}
