use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Untyped payload as returned by a source adapter. Downstream stages treat
/// it opaquely; the two built-in sources return differently shaped envelopes
/// and nothing normalizes them.
pub type RawPayload = serde_json::Value;

/// Domain entity for a single ingested frame.
///
/// Not yet produced anywhere: the pass-through parser hands payloads on
/// unchanged, so no stage maps raw records into `Frame`. The type is kept as
/// the target for a future payload-to-frame parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub id: String,
    pub name: String,
    pub location: Option<String>,
}

/// Closed set of value kinds the persistence layer knows how to encode.
///
/// Every byte that reaches a storage backend goes through
/// [`crate::core::convert::convert_to_bytes`], so this enum is the single
/// choke point for the on-disk representation of ingested data.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreValue {
    Text(String),
    Bytes(Vec<u8>),
    Json(Value),
    Bool(bool),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Duration(Duration),
}

impl From<&str> for StoreValue {
    fn from(s: &str) -> Self {
        StoreValue::Text(s.to_string())
    }
}

impl From<String> for StoreValue {
    fn from(s: String) -> Self {
        StoreValue::Text(s)
    }
}

impl From<Vec<u8>> for StoreValue {
    fn from(b: Vec<u8>) -> Self {
        StoreValue::Bytes(b)
    }
}

impl From<&[u8]> for StoreValue {
    fn from(b: &[u8]) -> Self {
        StoreValue::Bytes(b.to_vec())
    }
}

impl From<Value> for StoreValue {
    fn from(v: Value) -> Self {
        StoreValue::Json(v)
    }
}

impl From<bool> for StoreValue {
    fn from(b: bool) -> Self {
        StoreValue::Bool(b)
    }
}

impl From<i64> for StoreValue {
    fn from(i: i64) -> Self {
        StoreValue::Int(i)
    }
}

impl From<f64> for StoreValue {
    fn from(f: f64) -> Self {
        StoreValue::Float(f)
    }
}

impl From<NaiveDate> for StoreValue {
    fn from(d: NaiveDate) -> Self {
        StoreValue::Date(d)
    }
}

impl From<DateTime<Utc>> for StoreValue {
    fn from(dt: DateTime<Utc>) -> Self {
        StoreValue::DateTime(dt)
    }
}

impl From<Duration> for StoreValue {
    fn from(d: Duration) -> Self {
        StoreValue::Duration(d)
    }
}
