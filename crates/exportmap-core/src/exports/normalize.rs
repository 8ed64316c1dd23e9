//! Public entry point: exports value in, flat subpath map out.

use super::collect::collect_candidates;
use super::conditions::{ConditionSet, DEFAULT_CONDITIONS};
use super::expand::{expand_wildcards, FlatExports};
use super::fs::{FileSystem, OsFs};
use super::node::Exports;
use super::validate::validate_exports;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Per-call options for [`normalize_exports`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Active conditions. Empty means "use the resolver's defaults".
    #[serde(default)]
    pub conditions: Vec<String>,

    /// Root directory for wildcard expansion. None leaves wildcards unexpanded.
    #[serde(default)]
    pub cwd: Option<PathBuf>,
}

impl NormalizeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default condition set.
    #[must_use]
    pub fn with_conditions<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conditions = conditions.into_iter().map(Into::into).collect();
        self
    }

    /// Expand wildcards against files under `cwd`.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

/// Normalizes exports declarations against a default condition set.
#[derive(Debug, Clone)]
pub struct ExportsResolver {
    default_conditions: Vec<String>,
}

impl Default for ExportsResolver {
    fn default() -> Self {
        Self::with_default_conditions(DEFAULT_CONDITIONS.iter().copied())
    }
}

impl ExportsResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different default condition set.
    pub fn with_default_conditions<I, S>(conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            default_conditions: conditions.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn default_conditions(&self) -> &[String] {
        &self.default_conditions
    }

    /// Condition set for a call: the caller's list if non-empty, else the defaults.
    #[must_use]
    pub fn effective_conditions(&self, options: &NormalizeOptions) -> ConditionSet {
        if options.conditions.is_empty() {
            self.default_conditions.iter().cloned().collect()
        } else {
            options.conditions.iter().cloned().collect()
        }
    }

    /// Normalize against the real filesystem.
    pub fn normalize(&self, exports: &Value, options: &NormalizeOptions) -> Result<FlatExports> {
        self.normalize_with_fs(exports, options, &OsFs)
    }

    /// Normalize with an explicit filesystem capability.
    pub fn normalize_with_fs(
        &self,
        exports: &Value,
        options: &NormalizeOptions,
        fs: &dyn FileSystem,
    ) -> Result<FlatExports> {
        if is_undefined(exports) {
            return Err(Error::UndefinedExports);
        }
        validate_exports(exports)?;

        let conditions = self.effective_conditions(options);
        let declared = Exports::from_value(exports)?;
        let candidates = collect_candidates(&declared, &conditions)?;

        expand_wildcards(&candidates, options.cwd.as_deref(), fs)
    }
}

/// Normalize `exports` with the default conditions and the real filesystem.
pub fn normalize_exports(exports: &Value, options: &NormalizeOptions) -> Result<FlatExports> {
    ExportsResolver::default().normalize(exports, options)
}

fn is_undefined(exports: &Value) -> bool {
    match exports {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
