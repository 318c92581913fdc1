use crate::domain::model::RawPayload;
use crate::domain::ports::Parser;

/// Pass-through parser: returns the payload unchanged.
///
/// Placeholder for real mapping, validation or enrichment (for instance a
/// payload-to-`Frame` mapper), none of which exists yet.
pub struct PassthroughParser;

impl Parser for PassthroughParser {
    fn parse(&self, raw: RawPayload) -> RawPayload {
        raw
    }
}
