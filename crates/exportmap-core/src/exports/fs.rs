//! Filesystem capability used by wildcard expansion.

use crate::error::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub use exportmap_util::fs::WalkedEntry;

/// The narrow slice of filesystem access wildcard expansion needs.
pub trait FileSystem: std::fmt::Debug {
    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// List every entry below `dir`, with `/`-separated relative paths.
    fn list_files_recursive(&self, dir: &Path) -> Result<Vec<WalkedEntry>>;
}

/// The real filesystem. Read-only, uncached.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl FileSystem for OsFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_files_recursive(&self, dir: &Path) -> Result<Vec<WalkedEntry>> {
        Ok(exportmap_util::fs::list_files_recursive(dir)?)
    }
}

/// In-memory file tree. Directories exist implicitly above their files.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: BTreeSet<PathBuf>,
}

impl MemoryFs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    /// Add several files.
    #[must_use]
    pub fn with_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(paths.into_iter().map(Into::into));
        self
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.iter().any(|f| f.starts_with(path))
    }

    fn list_files_recursive(&self, dir: &Path) -> Result<Vec<WalkedEntry>> {
        Ok(self
            .files
            .iter()
            .filter_map(|f| f.strip_prefix(dir).ok())
            .filter(|rel| !rel.as_os_str().is_empty())
            .map(|rel| WalkedEntry {
                relative_path: exportmap_util::fs::to_slash(rel),
                is_file: true,
            })
            .collect())
    }
}
