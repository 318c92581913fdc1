//! Composition root: the one place where concrete implementations are chosen
//! and wired into the pipeline's abstract roles.

use crate::adapters::storage::{PathStorage, UnityCatalogVolumeStorage, VolumeLocation};
use crate::config::registry::{Registry, StorageProvider};
use crate::config::Context;
use crate::core::use_case::DownloadAndStore;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Entry point for orchestration systems: resolve the three components named
/// by `context`, wire them into the use case and run it once.
pub fn ingest_frames_into_landing_layer(registry: &Registry, context: &Context) -> Result<()> {
    let source_factory = registry.resolve_source(&context.source)?;
    let parser_factory = registry.resolve_parser(&context.parser)?;
    let storage_provider = registry.resolve_storage(&context.storage)?;

    let source = source_factory();
    let parser = parser_factory();
    let storage = build_storage(storage_provider, context)?;

    DownloadAndStore::new(source, parser, storage).execute()
}

/// Storage construction is the one role whose constructor-argument shape
/// depends on the resolved variant, so it gets an exhaustive match here.
fn build_storage(provider: StorageProvider, context: &Context) -> Result<Box<dyn Storage>> {
    tracing::info!(storage_type = provider.storage_type(), "building storage");
    match provider {
        StorageProvider::UnityCatalogVolume => {
            let storage = UnityCatalogVolumeStorage::new(VolumeLocation {
                catalog: context.base_catalog_name(),
                schema: "default".to_string(),
                volume: "sales-reporting-gen2-temp".to_string(),
                file_path: "landing_layer_test/2025_file.json".to_string(),
            })?;
            Ok(Box::new(storage))
        }
        StorageProvider::LinuxPath => Ok(Box::new(PathStorage::new(
            "/Volumes/dev_catalog_base/default/sales-reporting-gen2-temp/landing_layer_test/2025_file.json",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::IngestError;

    #[test]
    fn unresolvable_context_fails_before_any_instantiation() {
        let registry = Registry::builtin();
        let mut context = Context::local_default();
        context.source = "frame_ingest.adapters.sources.Missing".into();

        let err = ingest_frames_into_landing_layer(&registry, &context).unwrap_err();
        assert!(matches!(err, IngestError::UnknownComponent { .. }));
    }

    #[test]
    fn volume_storage_builds_from_context_catalog() {
        let context = Context::local_default();
        assert!(build_storage(StorageProvider::UnityCatalogVolume, &context).is_ok());
    }
}
