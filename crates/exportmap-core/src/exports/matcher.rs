//! Condition matching over an exports tree.

use super::conditions::ConditionSet;
use super::node::ExportsNode;
use crate::error::{Error, Result};

/// Outcome of matching one subtree against a condition set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    /// No active condition applies.
    Unresolved,
    /// A target was selected.
    Resolved(String),
    /// The declaration deliberately offers no target (empty alternatives).
    Excluded,
}

/// Resolve a subtree to a single target under `conditions`.
///
/// - Targets must start with `./`.
/// - Conditions are tried in declaration order; an `Unresolved` branch falls
///   through to the next active condition, anything else is final.
/// - Alternatives are tried in order until one resolves. Errors from earlier
///   alternatives are kept and the last one is returned only if nothing
///   resolves. An empty list is `Excluded`.
pub fn match_node(node: &ExportsNode, conditions: &ConditionSet) -> Result<Match> {
    match node {
        ExportsNode::Target(target) => validate_target(target).map(Match::Resolved),
        ExportsNode::Conditions(entries) => {
            for (_, value) in entries.iter().filter(|(cond, _)| conditions.contains(cond)) {
                match match_node(value, conditions)? {
                    Match::Unresolved => {}
                    found => return Ok(found),
                }
            }
            Ok(Match::Unresolved)
        }
        ExportsNode::Alternatives(items) if items.is_empty() => Ok(Match::Excluded),
        ExportsNode::Alternatives(items) => {
            let mut last_error = None;
            for item in items {
                match match_node(item, conditions) {
                    Ok(Match::Resolved(target)) => return Ok(Match::Resolved(target)),
                    Ok(Match::Unresolved | Match::Excluded) => {}
                    Err(e) => last_error = Some(e),
                }
            }
            last_error.map_or(Ok(Match::Unresolved), Err)
        }
    }
}

/// Validate that an export target starts with "./" as required by Node.
fn validate_target(target: &str) -> Result<String> {
    if target.starts_with("./") {
        Ok(target.to_string())
    } else {
        Err(Error::InvalidTarget {
            target: target.to_string(),
        })
    }
}
