use serde_json::Value;

use crate::domain::model::StoreValue;
use crate::utils::error::{IngestError, Result};

/// Convert a value to its canonical byte encoding.
///
/// Deterministic: the same value always yields the same bytes. The Bool arm
/// must stay ahead of the numeric arms; booleans encode textually, never as
/// `1`/`0` (languages that treat bool as a numeric subtype get this wrong
/// when the checks are reordered).
pub fn convert_to_bytes(value: &StoreValue) -> Result<Vec<u8>> {
    match value {
        StoreValue::Text(s) => Ok(s.as_bytes().to_vec()),
        StoreValue::Bytes(b) => Ok(b.clone()),
        StoreValue::Json(v) => convert_json(v),
        StoreValue::Bool(b) => Ok(bool_bytes(*b)),
        StoreValue::Int(i) => Ok(i.to_string().into_bytes()),
        StoreValue::Float(f) => Ok(f.to_string().into_bytes()),
        StoreValue::Date(d) => Ok(d.to_string().into_bytes()),
        StoreValue::DateTime(dt) => Ok(dt.to_rfc3339().into_bytes()),
        StoreValue::Duration(d) => Ok(d.as_secs_f64().to_string().into_bytes()),
    }
}

fn convert_json(value: &Value) -> Result<Vec<u8>> {
    match value {
        // A bare null has no byte encoding; nulls nested inside a structure
        // are part of its JSON text and pass through below.
        Value::Null => Err(IngestError::UnsupportedType {
            kind: "null".to_string(),
        }),
        // Bool before Number, same ordering rule as the outer match.
        Value::Bool(b) => Ok(bool_bytes(*b)),
        Value::Number(n) => Ok(n.to_string().into_bytes()),
        Value::String(s) => Ok(s.as_bytes().to_vec()),
        Value::Array(_) | Value::Object(_) => Ok(serde_json::to_vec(value)?),
    }
}

fn bool_bytes(b: bool) -> Vec<u8> {
    if b {
        b"true".to_vec()
    } else {
        b"false".to_vec()
    }
}
