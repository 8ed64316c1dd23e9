//! Typed model of the exports grammar.
//!
//! ```text
//! ExportsNode := string | { condition: ExportsNode, ... } | [ ExportsNode, ... ]
//! Exports     := ExportsNode | { subpath: ExportsNode | null, ... }
//! ```

use crate::error::{Error, Result};
use serde_json::Value;

/// One node of a conditional exports tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportsNode {
    /// A literal target path. Only valid when it starts with `./`.
    Target(String),
    /// Condition name to subtree, in declaration order.
    Conditions(Vec<(String, ExportsNode)>),
    /// Fallback list, tried in order. An empty list means "no target".
    Alternatives(Vec<ExportsNode>),
}

impl ExportsNode {
    /// Build a node from a JSON value.
    ///
    /// `null` becomes an empty alternatives list, the explicit "no target" form.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Self::Target(s.clone())),
            Value::Object(map) => map
                .iter()
                .map(|(cond, v)| Ok((cond.clone(), Self::from_value(v)?)))
                .collect::<Result<Vec<_>>>()
                .map(Self::Conditions),
            Value::Array(items) => items
                .iter()
                .map(Self::from_value)
                .collect::<Result<Vec<_>>>()
                .map(Self::Alternatives),
            Value::Null => Ok(Self::Alternatives(Vec::new())),
            Value::Bool(_) | Value::Number(_) => Err(Error::UnsupportedExportsValue {
                kind: json_kind(value),
            }),
        }
    }
}

/// A whole `exports` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exports {
    /// Root shorthand: the value itself describes the `"."` entry.
    Root(ExportsNode),
    /// Subpath keys (`"."` or `"./..."`) to their node, in declaration order.
    Subpaths(Vec<(String, ExportsNode)>),
}

impl Exports {
    /// Classify and convert a top-level exports value.
    ///
    /// A non-empty mapping whose keys all start with `.` is the subpath form;
    /// anything else is the root shorthand. Mixed mappings are rejected by
    /// [`super::validate::validate_exports`] before this runs.
    pub fn from_value(value: &Value) -> Result<Self> {
        if let Value::Object(map) = value {
            if !map.is_empty() && map.keys().all(|k| is_subpath_key(k)) {
                return map
                    .iter()
                    .map(|(key, v)| Ok((key.clone(), ExportsNode::from_value(v)?)))
                    .collect::<Result<Vec<_>>>()
                    .map(Self::Subpaths);
            }
        }
        ExportsNode::from_value(value).map(Self::Root)
    }
}

/// Subpath keys start with `.`; condition names never do.
#[must_use]
pub fn is_subpath_key(key: &str) -> bool {
    key.starts_with('.')
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
