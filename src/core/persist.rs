use std::fs;
use std::path::Path;

use crate::core::convert::convert_to_bytes;
use crate::domain::model::StoreValue;
use crate::utils::error::Result;

/// Write a value to `destination`, creating missing ancestor directories and
/// overwriting any existing content.
///
/// This is a fire-and-forget landing write: a failure mid-write can leave a
/// truncated file behind, and concurrent writers to the same path race with
/// last-writer-wins.
pub fn save_to_file(value: &StoreValue, destination: &Path) -> Result<()> {
    let bytes = convert_to_bytes(value)?;

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(destination, &bytes)?;

    tracing::info!("data written to {}", destination.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn creates_deep_missing_ancestors() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("a/b/c/d/file.json");

        save_to_file(&StoreValue::Json(json!({"id": 1})), &destination).unwrap();

        assert!(temp_dir.path().join("a").is_dir());
        assert!(temp_dir.path().join("a/b/c").is_dir());
        assert_eq!(fs::read(&destination).unwrap(), b"{\"id\":1}");
    }

    #[test]
    fn overwrites_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("out.txt");

        save_to_file(&StoreValue::from("first, longer content"), &destination).unwrap();
        save_to_file(&StoreValue::from("second"), &destination).unwrap();

        assert_eq!(fs::read(&destination).unwrap(), b"second");
    }

    #[test]
    fn unsupported_value_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("nested/out.txt");

        let result = save_to_file(&StoreValue::Json(serde_json::Value::Null), &destination);

        assert!(result.is_err());
        assert!(!destination.exists());
        // Conversion failed before any filesystem work.
        assert!(!temp_dir.path().join("nested").exists());
    }
}
