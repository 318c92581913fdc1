use crate::domain::model::{RawPayload, StoreValue};
use crate::utils::error::Result;

/// A source of raw frame data. Could be backed by REST, GraphQL, a queue or
/// a file; the use case only sees this trait.
pub trait Source {
    fn download(&self) -> RawPayload;
}

/// Transforms a downloaded payload before persistence.
pub trait Parser {
    fn parse(&self, raw: RawPayload) -> RawPayload;
}

/// Persists a value to a storage backend.
pub trait Storage {
    fn save(&self, value: &StoreValue) -> Result<()>;
}
