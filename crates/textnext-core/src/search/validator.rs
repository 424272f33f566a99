//! Response validation.
//!
//! The service's response shape is not guaranteed, so nothing is deserialized
//! straight into `SearchRecord`. Each array element goes through an explicit
//! check that yields either a record or a `RecordShapeError`.

use serde_json::{Map, Value};

use crate::error::{RecordShapeError, Result, SearchError};
use crate::search::model::{SearchRecord, ValidatedBatch};
use crate::search::sanitizer::sanitize;

/// Validates a decoded response body.
///
/// # Errors
///
/// Returns `SearchError::Schema` when `value` is not an array. Malformed
/// elements are not errors: they are reported in `ValidatedBatch::rejected`.
pub fn validate(value: &Value) -> Result<ValidatedBatch> {
    let elements = value
        .as_array()
        .ok_or_else(|| SearchError::schema(format!("expected array, got {}", kind(value))))?;

    let mut batch = ValidatedBatch::default();
    for (index, element) in elements.iter().enumerate() {
        match check_record(index, element) {
            Ok(record) => batch.records.push(record),
            Err(rejection) => {
                tracing::warn!(index, reason = %rejection.reason, "unexpected object from API");
                batch.rejected.push(rejection);
            }
        }
    }

    Ok(batch)
}

/// Checks one array element and builds a sanitized record from it.
///
/// `index` is only used to label the rejection.
pub fn check_record(
    index: usize,
    element: &Value,
) -> std::result::Result<SearchRecord, RecordShapeError> {
    let object = element
        .as_object()
        .ok_or_else(|| RecordShapeError::new(index, format!("expected object, got {}", kind(element))))?;

    let id = integer_field(object, "id").map_err(|reason| RecordShapeError::new(index, reason))?;
    let text = string_field(object, "text").map_err(|reason| RecordShapeError::new(index, reason))?;
    let date = string_field(object, "date").map_err(|reason| RecordShapeError::new(index, reason))?;
    let phase =
        string_field(object, "phase").map_err(|reason| RecordShapeError::new(index, reason))?;

    Ok(SearchRecord {
        id,
        text: sanitize(text),
        date: date.to_string(),
        phase: sanitize(phase),
    })
}

fn string_field<'a>(object: &'a Map<String, Value>, name: &str) -> std::result::Result<&'a str, String> {
    match object.get(name) {
        None => Err(format!("missing field `{name}`")),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(format!("field `{name}` is {}, expected string", kind(other))),
    }
}

fn integer_field(object: &Map<String, Value>, name: &str) -> std::result::Result<i64, String> {
    let value = object
        .get(name)
        .ok_or_else(|| format!("missing field `{name}`"))?;
    let Value::Number(number) = value else {
        return Err(format!("field `{name}` is {}, expected number", kind(value)));
    };

    if let Some(id) = number.as_i64() {
        return Ok(id);
    }
    // Integral floats such as `7.0` are still integers on the wire.
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(format!("field `{name}` ({number}) is not a 64-bit integer")),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
