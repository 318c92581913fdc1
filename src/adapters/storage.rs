use std::path::{Component, Path, PathBuf};

use crate::core::persist::save_to_file;
use crate::domain::model::StoreValue;
use crate::domain::ports::Storage;
use crate::utils::error::{IngestError, Result};

/// Filesystem storage addressed by a single candidate path.
///
/// Works against local disks, network mounts or container volume mounts.
/// The candidate path is resolved to a canonical absolute form before the
/// write so behaviour does not depend on where the process was started.
#[derive(Debug, Clone)]
pub struct PathStorage {
    file_path: PathBuf,
}

impl PathStorage {
    pub const STORAGE_TYPE: &'static str = "linux-path";

    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    fn absolute_path(&self) -> Result<PathBuf> {
        // canonicalize follows symlinks but only works for paths that exist;
        // fresh destinations get a lexical cleanup against the current dir.
        if let Ok(resolved) = self.file_path.canonicalize() {
            return Ok(resolved);
        }
        let absolute = if self.file_path.is_absolute() {
            self.file_path.clone()
        } else {
            std::env::current_dir()?.join(&self.file_path)
        };
        Ok(normalize(&absolute))
    }
}

impl Storage for PathStorage {
    fn save(&self, value: &StoreValue) -> Result<()> {
        save_to_file(value, &self.absolute_path()?)
    }
}

/// Collapse `.` and `..` segments without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Constructor parameters for [`UnityCatalogVolumeStorage`]: the three-level
/// namespace (catalog, schema, volume) plus a file path relative to the
/// volume root.
#[derive(Debug, Clone)]
pub struct VolumeLocation {
    pub catalog: String,
    pub schema: String,
    pub volume: String,
    pub file_path: String,
}

/// Storage addressed through a Unity Catalog volume mount.
///
/// Volumes are mounted at `/Volumes/{catalog}/{schema}/{volume}/`; the
/// absolute destination is that mount point joined with the relative file
/// path.
#[derive(Debug, Clone)]
pub struct UnityCatalogVolumeStorage {
    location: VolumeLocation,
}

impl UnityCatalogVolumeStorage {
    pub const STORAGE_TYPE: &'static str = "unity-catalog-volume";

    const MOUNT_ROOT: &'static str = "/Volumes";

    pub fn new(location: VolumeLocation) -> Result<Self> {
        if location.file_path.ends_with('/') {
            return Err(IngestError::Config {
                message: format!(
                    "file_path `{}` must name a file, not a directory",
                    location.file_path
                ),
            });
        }
        Ok(Self { location })
    }

    fn absolute_path(&self) -> PathBuf {
        Path::new(Self::MOUNT_ROOT)
            .join(&self.location.catalog)
            .join(&self.location.schema)
            .join(&self.location.volume)
            .join(&self.location.file_path)
    }
}

impl Storage for UnityCatalogVolumeStorage {
    fn save(&self, value: &StoreValue) -> Result<()> {
        save_to_file(value, &self.absolute_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn volume_location(file_path: &str) -> VolumeLocation {
        VolumeLocation {
            catalog: "dev_catalog_base".to_string(),
            schema: "default".to_string(),
            volume: "sales-reporting-gen2-temp".to_string(),
            file_path: file_path.to_string(),
        }
    }

    #[test]
    fn path_storage_resolves_relative_segments() {
        let storage = PathStorage::new("some/dir/../file.json");
        let resolved = storage.absolute_path().unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/file.json"));
    }

    #[test]
    fn path_storage_keeps_absolute_paths() {
        let storage = PathStorage::new("/tmp/landing/./out.json");
        let resolved = storage.absolute_path().unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/landing/out.json"));
    }

    #[test]
    fn path_storage_writes_converted_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("out.json");
        let payload = json!({"data": [{"id": 1, "name": "frame1"}]});

        let storage = PathStorage::new(&destination);
        storage.save(&StoreValue::Json(payload.clone())).unwrap();

        assert_eq!(
            std::fs::read(&destination).unwrap(),
            serde_json::to_vec(&payload).unwrap()
        );
    }

    #[test]
    fn volume_storage_rejects_directory_shaped_file_path() {
        let err = UnityCatalogVolumeStorage::new(volume_location("landing/")).unwrap_err();
        assert!(matches!(err, IngestError::Config { .. }));
    }

    #[test]
    fn volume_storage_rejects_trailing_slash_regardless_of_other_fields() {
        let location = VolumeLocation {
            catalog: String::new(),
            schema: String::new(),
            volume: String::new(),
            file_path: "just-a-dir/".to_string(),
        };
        assert!(UnityCatalogVolumeStorage::new(location).is_err());
    }

    #[test]
    fn volume_storage_joins_mount_root_with_all_components() {
        let storage =
            UnityCatalogVolumeStorage::new(volume_location("landing_layer_test/2025_file.json"))
                .unwrap();
        assert_eq!(
            storage.absolute_path(),
            PathBuf::from(
                "/Volumes/dev_catalog_base/default/sales-reporting-gen2-temp/landing_layer_test/2025_file.json"
            )
        );
    }

    #[test]
    fn storage_type_tags_are_distinct() {
        assert_eq!(PathStorage::STORAGE_TYPE, "linux-path");
        assert_eq!(
            UnityCatalogVolumeStorage::STORAGE_TYPE,
            "unity-catalog-volume"
        );
    }
}
