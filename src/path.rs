//! Path lookup through nested JSON objects.
//!
//! Only object keys are followed. Arrays are never indexed, even when a
//! segment looks like a number.

use serde_json::Value;

/// Walk `path` from `record` and return the addressed value.
///
/// Returns None as soon as a segment is missing or the current value is not
/// an object. A found value may itself be `null`; existence is all that
/// "found" means here.
pub fn resolve<'a, S: AsRef<str>>(path: &[S], record: &'a Value) -> Option<&'a Value> {
    path.iter().try_fold(record, |current, segment| {
        let key: &str = segment.as_ref();
        match current {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    })
}
