//! Reusable field validators
//!
//! These are used by the dish and order validation chains

use crate::core::error::ValidationError;
use serde_json::Value;

/// Largest integer a JSON number can carry without losing precision
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Loose truthiness of an optional JSON value
///
/// Missing, `null`, `false`, `0` and `""` are falsy. Everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_none_or(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Check that every field is present in `data`, in order
///
/// The first absent field produces `"<resource> must include a <field>"`.
pub fn require_fields(
    resource: &'static str,
    data: &Value,
    fields: &[&str],
) -> Result<(), ValidationError> {
    match fields.iter().find(|field| !is_truthy(data.get(**field))) {
        Some(field) => Err(ValidationError::MissingField {
            resource,
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}

/// Read a required text field
pub fn text_field(
    resource: &'static str,
    data: &Value,
    field: &str,
) -> Result<String, ValidationError> {
    match data.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        value if !is_truthy(value) => Err(ValidationError::MissingField {
            resource,
            field: field.to_string(),
        }),
        _ => Err(ValidationError::NotText {
            resource,
            field: field.to_string(),
        }),
    }
}

/// Numeric reading of a value for `<= 0` style comparisons
///
/// Booleans count as 0/1, `null` and blank strings as 0, numeric strings
/// are parsed. Arrays, objects and unparseable strings have no numeric
/// value.
pub fn loose_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok().filter(|f| !f.is_nan())
            }
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// The value as a whole number, if it is a JSON number without a fraction
///
/// `10.0` counts as whole; strings never do.
pub fn whole_number(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER)
        .map(|f| f as i64)
}

/// Render a JSON value the way it appears in messages (strings unquoted)
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Compare the body's `id` with the id from the route
///
/// Returns the body id, rendered for messages, when it is present and
/// differs from `route_id`. An absent or falsy body id never conflicts.
pub fn conflicting_id(data: &Value, route_id: &str) -> Option<String> {
    let body_id = data.get("id");
    if !is_truthy(body_id) {
        return None;
    }
    match body_id {
        Some(Value::String(s)) if s == route_id => None,
        Some(other) => Some(display_value(other)),
        None => None,
    }
}
