//! Condition sets.

use std::collections::HashSet;

/// Conditions used when the caller does not supply any.
pub const DEFAULT_CONDITIONS: &[&str] = &["node-addons", "node", "import", "require", "default"];

/// The set of active conditions for one resolution call.
///
/// Unordered: precedence always comes from the declaration order inside the
/// exports tree, never from the order conditions were listed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionSet {
    names: HashSet<String>,
}

impl ConditionSet {
    /// Create a set from condition names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a condition is active.
    #[must_use]
    pub fn contains(&self, condition: &str) -> bool {
        self.names.contains(condition)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl<S: Into<String>> FromIterator<S> for ConditionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
