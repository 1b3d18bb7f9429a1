//! Value checks: type constraints, truthiness and numeric detection.
//!
//! All functions are pure.

use crate::descriptor::FieldType;

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// Numeric string: optional surrounding whitespace, optional sign, digits with
// an optional fraction (or a bare fraction), optional exponent.
const NUMERIC_STRING_RE: &str =
    r"^[ \t\n\r\x0B\f]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[ \t\n\r\x0B\f]*$";

static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMERIC_STRING_RE).expect("numeric string pattern compiles"));

/// Check `value` against a type constraint and optional bound.
///
/// | type    | check                                                          |
/// |---------|----------------------------------------------------------------|
/// | Any     | always true                                                    |
/// | String  | JSON string; bound = max character count                       |
/// | Integer | integer-valued number or numeric string; bound = value's digits |
/// | Boolean | true/false or exactly "true"/"false"; bound ignored            |
pub fn validate(value: &Value, field_type: &FieldType, max_length: Option<usize>) -> bool {
    match field_type {
        FieldType::Any | FieldType::Unrecognized(_) => true,
        FieldType::String => match value {
            Value::String(s) => within(s.chars().count(), max_length),
            _ => false,
        },
        FieldType::Integer => match integer_digits(value) {
            Some(digits) => within(digits, max_length),
            None => false,
        },
        FieldType::Boolean => matches!(value, Value::Bool(_))
            || matches!(value, Value::String(s) if s == "true" || s == "false"),
    }
}

/// Conventional truthiness: null, false, 0, "", "0", [] and {} are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Numbers, and strings that spell a number.
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => NUMERIC_RE.is_match(s),
        _ => false,
    }
}

/// Truthiness with the numeric exemption: `0` and `"0"` count as present.
pub fn passes_truthiness(value: &Value) -> bool {
    is_truthy(value) || is_numeric(value)
}

/// Numeric value of a number or numeric string.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if NUMERIC_RE.is_match(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Decimal digits of the value's integer magnitude, or None if the value is
/// not integer-valued.
///
/// The sign and any leading zeros are not digits of the value: "-0042",
/// "42.0", 42.0 and "4.2e1" all count as 2.
fn integer_digits(value: &Value) -> Option<usize> {
    let magnitude = match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => {
            n.to_string().trim_start_matches('-').to_string()
        }
        Value::Number(_) => whole_float_magnitude(value)?,
        Value::String(s) => match s.trim().parse::<i128>() {
            Ok(i) => i.unsigned_abs().to_string(),
            Err(_) => whole_float_magnitude(value)?,
        },
        _ => return None,
    };
    Some(magnitude.chars().filter(|c| c.is_ascii_digit()).count())
}

/// |value| rendered without a fraction, if the numeric value is whole.
fn whole_float_magnitude(value: &Value) -> Option<String> {
    let f = numeric_value(value)?;
    (f.is_finite() && f.trunc() == f).then(|| format!("{}", f.abs()))
}

fn within(len: usize, max_length: Option<usize>) -> bool {
    max_length.is_none_or(|max| len <= max)
}
