//! Shape checks on the top-level exports value.

use super::node::is_subpath_key;
use crate::error::{Error, Result};
use serde_json::Value;

/// Reject exports values that cannot be resolved at all.
///
/// Fails with [`Error::EmptyExports`] for `null`, `{}` and `[]`, and with
/// [`Error::MixedKeyFormat`] for a mapping where only some keys start with `.`.
pub fn validate_exports(exports: &Value) -> Result<()> {
    match exports {
        Value::Null => Err(Error::EmptyExports),
        Value::Array(items) if items.is_empty() => Err(Error::EmptyExports),
        Value::Object(map) if map.is_empty() => Err(Error::EmptyExports),
        Value::Object(map) => {
            let subpaths = map.keys().filter(|k| is_subpath_key(k)).count();
            if subpaths == 0 || subpaths == map.len() {
                return Ok(());
            }
            // Name the first condition-style key that sits among subpaths
            let key = map
                .keys()
                .find(|k| !is_subpath_key(k))
                .cloned()
                .unwrap_or_default();
            Err(Error::MixedKeyFormat { key })
        }
        _ => Ok(()),
    }
}
