//! Package manifest loading.

use crate::error::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// Read and parse a `package.json`.
pub fn read_package_json(path: &Path) -> Result<Value> {
    let content =
        exportmap_util::fs::read_to_string_lossy(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&content).map_err(|source| Error::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}

/// The manifest's `exports` field, or `Value::Null` when it is missing.
#[must_use]
pub fn exports_field(pkg_json: &Value) -> &Value {
    pkg_json.get("exports").unwrap_or(&Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_package_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"name": "pkg", "exports": "./index.js"}"#).unwrap();

        let pkg = read_package_json(&path).unwrap();
        assert_eq!(exports_field(&pkg), &json!("./index.js"));
    }

    #[test]
    fn test_read_package_json_missing() {
        let dir = tempdir().unwrap();
        let err = read_package_json(&dir.path().join("package.json")).unwrap_err();
        assert!(matches!(err, Error::ManifestRead { .. }));
    }

    #[test]
    fn test_read_package_json_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_package_json(&path).unwrap_err();
        assert!(matches!(err, Error::ManifestParse { .. }));
    }

    #[test]
    fn test_exports_field_missing() {
        let pkg = json!({ "name": "pkg", "main": "./index.js" });
        assert!(exports_field(&pkg).is_null());
    }
}
