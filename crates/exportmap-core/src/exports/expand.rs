//! Wildcard subpath expansion.
//!
//! A `"./features/*": "./dist/features/*.js"` entry becomes one concrete entry
//! per file under `<root>/dist/features` ending in `.js`. Exclusion entries
//! (`null` or `[]` subpaths) then prune whatever expansions fall under them.

use super::collect::{Candidate, CandidateExports};
use super::fs::FileSystem;
use super::pattern::{by_specificity, star_count, Wildcard};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Concrete subpath to concrete target.
pub type FlatExports = BTreeMap<String, String>;

/// Expand wildcard candidates against `root` and drop exclusion markers.
///
/// Without a root, wildcard entries are returned as declared. Literal entries
/// always win over an expansion producing the same key.
pub fn expand_wildcards(
    candidates: &CandidateExports,
    root: Option<&Path>,
    fs: &dyn FileSystem,
) -> Result<FlatExports> {
    let mut literal = FlatExports::new();
    let mut patterns: Vec<(&str, &str)> = Vec::new();
    let mut exclusions: Vec<&str> = Vec::new();

    for (subpath, candidate) in candidates {
        let is_pattern = subpath.contains('*');
        if is_pattern && star_count(subpath) > 1 {
            return Err(Error::InvalidSubpathPattern {
                pattern: subpath.clone(),
            });
        }

        match candidate {
            Candidate::Excluded => exclusions.push(subpath.as_str()),
            Candidate::Target(target) if is_pattern => {
                if star_count(target) != 1 {
                    return Err(Error::UnsupportedWildcardTarget {
                        subpath: subpath.clone(),
                        target: target.clone(),
                    });
                }
                patterns.push((subpath.as_str(), target.as_str()));
            }
            Candidate::Target(target) => {
                literal.insert(subpath.clone(), target.clone());
            }
        }
    }

    let Some(root) = root else {
        let mut flat: FlatExports = patterns
            .into_iter()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect();
        flat.extend(literal);
        return Ok(flat);
    };

    patterns.sort_by(|a, b| by_specificity(a.0, b.0));

    let expanded = patterns
        .iter()
        .try_fold(FlatExports::new(), |mut acc, (subpath, target)| {
            for (key, value) in expand_pattern(subpath, target, root, fs)? {
                // Most specific pattern was expanded first
                acc.entry(key).or_insert(value);
            }
            Ok::<_, Error>(acc)
        })?;

    let mut flat = prune_excluded(expanded, &exclusions);
    flat.extend(literal);
    Ok(flat)
}

/// Expand one `subpath -> target` pattern pair by scanning the target's directory.
fn expand_pattern(
    subpath: &str,
    target: &str,
    root: &Path,
    fs: &dyn FileSystem,
) -> Result<Vec<(String, String)>> {
    let (Some(key_pattern), Some(target_pattern)) =
        (Wildcard::parse(subpath), Wildcard::parse(target))
    else {
        return Ok(Vec::new());
    };

    // Everything before the `*` names the directory to scan
    let dir = resolve_dir(root, target_pattern.prefix);
    if !fs.exists(&dir) {
        return Err(Error::DirectoryNotFound { path: dir });
    }

    Ok(fs
        .list_files_recursive(&dir)?
        .into_iter()
        .filter(|entry| entry.is_file)
        .filter_map(|entry| {
            // The capture may be empty: "dist/features/.js" is a file like any other
            let star_value = entry.relative_path.strip_suffix(target_pattern.suffix)?;
            Some((
                key_pattern.substitute(star_value),
                target_pattern.substitute(star_value),
            ))
        })
        .collect())
}

/// Join a `./`-relative directory prefix onto the root.
fn resolve_dir(root: &Path, prefix: &str) -> PathBuf {
    let rel = prefix.strip_prefix("./").unwrap_or(prefix);
    let rel = rel.trim_end_matches('/');
    if rel.is_empty() {
        root.to_path_buf()
    } else {
        root.join(rel)
    }
}

/// Remove expanded entries vetoed by an exclusion.
///
/// A wildcard exclusion removes every key it matches with a non-empty capture;
/// a literal exclusion removes exactly its own key.
fn prune_excluded(expanded: FlatExports, exclusions: &[&str]) -> FlatExports {
    if exclusions.is_empty() {
        return expanded;
    }

    let vetoes: Vec<Veto<'_>> = exclusions
        .iter()
        .map(|&ex| Wildcard::parse(ex).map_or(Veto::Exact(ex), Veto::Pattern))
        .collect();

    expanded
        .into_iter()
        .filter(|(key, _)| !vetoes.iter().any(|veto| veto.matches(key)))
        .collect()
}

/// An exclusion entry, ready to test expanded keys against.
enum Veto<'a> {
    Pattern(Wildcard<'a>),
    Exact(&'a str),
}

impl Veto<'_> {
    fn matches(&self, key: &str) -> bool {
        match self {
            Self::Pattern(pattern) => pattern.capture_non_empty(key).is_some(),
            Self::Exact(exact) => key == *exact,
        }
    }
}
