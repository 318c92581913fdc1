use frame_ingest::adapters::parser::PassthroughParser;
use frame_ingest::adapters::storage::PathStorage;
use frame_ingest::domain::model::RawPayload;
use frame_ingest::domain::ports::Source;
use frame_ingest::{ComponentRef, Context, DownloadAndStore, Registry};
use serde_json::json;
use tempfile::TempDir;

struct FixedSource {
    payload: RawPayload,
}

impl Source for FixedSource {
    fn download(&self) -> RawPayload {
        self.payload.clone()
    }
}

#[test]
fn end_to_end_landing_write_is_byte_exact() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("out.json");
    let payload = json!({"data": [{"id": 1, "name": "frame1"}]});

    let use_case = DownloadAndStore::new(
        Box::new(FixedSource {
            payload: payload.clone(),
        }),
        Box::new(PassthroughParser),
        Box::new(PathStorage::new(&destination)),
    );
    use_case.execute().unwrap();

    let written = std::fs::read(&destination).unwrap();
    assert_eq!(written, serde_json::to_vec(&payload).unwrap());
}

#[test]
fn registry_resolved_pipeline_lands_the_stub_payload() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("landing/frames.json");
    let context = Context::local_default();
    let registry = Registry::builtin();

    // Resolve source and parser through the registry like the composition
    // root does; point the storage at a temporary landing path.
    let source = registry.resolve_source(&context.source).unwrap()();
    let parser = registry.resolve_parser(&context.parser).unwrap()();
    let storage = Box::new(PathStorage::new(&destination));

    DownloadAndStore::new(source, parser, storage)
        .execute()
        .unwrap();

    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&destination).unwrap()).unwrap();
    let frames = written["payload"].as_array().unwrap();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0]["id"], 10);
    assert_eq!(frames[0]["location"], "London, UK");
}

#[test]
fn swapping_the_source_changes_only_the_landed_envelope() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("frames.json");
    let registry = Registry::builtin();

    let source = registry
        .resolve_source(&ComponentRef::parse(
            "frame_ingest.adapters.sources.FrameApi",
        ))
        .unwrap()();
    let parser = registry
        .resolve_parser(&Context::local_default().parser)
        .unwrap()();

    DownloadAndStore::new(source, parser, Box::new(PathStorage::new(&destination)))
        .execute()
        .unwrap();

    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&destination).unwrap()).unwrap();
    assert_eq!(written["limit"], 500);
    assert_eq!(written["data"].as_array().unwrap().len(), 3);
}
