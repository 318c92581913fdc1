use serde_json::json;

use crate::domain::model::RawPayload;
use crate::domain::ports::Source;

/// REST-style source stub returning a fixed paginated envelope.
///
/// A real implementation would issue HTTP requests, handle auth and walk
/// pages; this one exists to exercise the pipeline wiring.
pub struct FrameApi;

impl Source for FrameApi {
    fn download(&self) -> RawPayload {
        tracing::debug!("FrameApi.download called");
        json!({
            "start": 0,
            "offset": 0,
            "limit": 500,
            "data": [
                {"id": 1, "name": "frame1"},
                {"id": 2, "name": "frame2"},
                {"id": 3, "name": "frame3"},
            ]
        })
    }
}

/// GraphQL-style source stub. Note the envelope differs from [`FrameApi`]
/// (`payload` array, extra `location` field); downstream code treats both
/// opaquely and does not normalize them.
pub struct GraphQlApi;

impl Source for GraphQlApi {
    fn download(&self) -> RawPayload {
        tracing::debug!("GraphQlApi.download called");
        json!({
            "payload": [
                {"id": 10, "name": "frame1", "location": "London, UK"},
                {"id": 12, "name": "frame2", "location": "London, UK"},
                {"id": 13, "name": "frame3", "location": "London, UK"},
                {"id": 14, "name": "frame4", "location": "London, UK"},
            ]
        })
    }
}
