//! Accessors over raw collector signals
//!
//! Collector payloads are open-shaped JSON by contract, so scoring and
//! rule code reads them through these helpers. A missing or mistyped
//! field always reads as absent, never as an error: scorers treat
//! absence as "criterion not met" and rules treat it as "cannot
//! evaluate, skip".

use serde_json::Value;

/// Walk a dotted path through nested objects.
pub fn get<'a>(signals: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = signals;
    for key in path.split('.') {
        current = current.as_object()?.get(key)?;
    }
    Some(current)
}

/// Read a string at a dotted path. JSON null reads as absent.
pub fn str_at<'a>(signals: &'a Value, path: &str) -> Option<&'a str> {
    get(signals, path).and_then(Value::as_str)
}

/// Read a number at a dotted path, accepting integers and floats.
pub fn f64_at(signals: &Value, path: &str) -> Option<f64> {
    get(signals, path).and_then(Value::as_f64)
}

/// Read an integer count at a dotted path. Negative values read as absent.
pub fn count_at(signals: &Value, path: &str) -> Option<u64> {
    get(signals, path).and_then(Value::as_u64)
}

/// Read a boolean at a dotted path.
pub fn bool_at(signals: &Value, path: &str) -> Option<bool> {
    get(signals, path).and_then(Value::as_bool)
}

/// True when the value at the path is a present, non-null, non-empty string.
pub fn has_text(signals: &Value, path: &str) -> bool {
    str_at(signals, path).is_some_and(|s| !s.is_empty())
}

/// True when the signals object itself is missing, null, or an empty map.
pub fn is_empty(signals: &Value) -> bool {
    match signals {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
