//! Per-subpath candidate collection.

use super::conditions::ConditionSet;
use super::matcher::{match_node, Match};
use super::node::Exports;
use crate::error::Result;
use std::collections::BTreeMap;

/// A collected subpath entry, before wildcard expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// Resolved target, possibly containing a `*`.
    Target(String),
    /// Exclusion marker; only used to prune wildcard expansions.
    Excluded,
}

/// Subpath (possibly a wildcard pattern) to candidate.
pub type CandidateExports = BTreeMap<String, Candidate>;

/// Match every declared subpath against `conditions`.
///
/// The root shorthand yields at most a `"."` entry. In the subpath form,
/// unresolved subpaths are dropped and excluded ones kept as markers.
pub fn collect_candidates(
    exports: &Exports,
    conditions: &ConditionSet,
) -> Result<CandidateExports> {
    let mut candidates = CandidateExports::new();

    match exports {
        Exports::Root(node) => {
            if let Match::Resolved(target) = match_node(node, conditions)? {
                candidates.insert(".".to_string(), Candidate::Target(target));
            }
        }
        Exports::Subpaths(entries) => {
            for (subpath, node) in entries {
                match match_node(node, conditions)? {
                    Match::Resolved(target) => {
                        candidates.insert(subpath.clone(), Candidate::Target(target));
                    }
                    Match::Excluded => {
                        candidates.insert(subpath.clone(), Candidate::Excluded);
                    }
                    Match::Unresolved => {}
                }
            }
        }
    }

    Ok(candidates)
}
