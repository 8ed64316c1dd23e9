use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Component, Path};
use walkdir::WalkDir;

/// An entry discovered under a directory by [`list_files_recursive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedEntry {
    /// Path relative to the walked directory, always `/`-separated.
    pub relative_path: String,
    /// Whether the entry is a regular file (symlinks are not followed).
    pub is_file: bool,
}

/// Read a file to string, replacing invalid UTF-8 sequences with the replacement character.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_to_string_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Recursively list every entry below `dir`, excluding `dir` itself.
///
/// Entries are sorted by file name at each level so repeated walks of an
/// unchanged tree yield the same sequence.
///
/// # Errors
/// Returns an error if the directory (or any entry below it) cannot be read.
pub fn list_files_recursive(dir: &Path) -> io::Result<Vec<WalkedEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .min_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;
        let rel = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        entries.push(WalkedEntry {
            relative_path: to_slash(rel),
            is_file: entry.file_type().is_file(),
        });
    }

    Ok(entries)
}

/// Join the normal components of a relative path with `/`.
#[must_use]
pub fn to_slash(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Atomically write bytes to a file by writing to a temp file then renaming.
///
/// The destination either keeps its old contents or receives the new ones,
/// never a partial write.
///
/// # Errors
/// Returns an error if the write or rename fails.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    // Same directory so the rename stays on one filesystem
    let temp_path = parent.join(format!(
        ".{}.tmp.{}",
        path.file_name().and_then(|n| n.to_str()).unwrap_or("exports"),
        std::process::id()
    ));

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        // Windows refuses to rename over an existing file
        if cfg!(windows) {
            fs::copy(&temp_path, path)?;
            let _ = fs::remove_file(&temp_path);
            return Ok(());
        }
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}
