//! Single-`*` pattern helpers shared by subpaths and targets.

use std::cmp::Ordering;

/// Count `*` occurrences.
pub(crate) fn star_count(s: &str) -> usize {
    s.chars().filter(|&c| c == '*').count()
}

/// A pattern split at its only `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Wildcard<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
}

impl<'a> Wildcard<'a> {
    /// Split `pattern` at its `*`. Returns None unless there is exactly one.
    pub fn parse(pattern: &'a str) -> Option<Self> {
        if star_count(pattern) != 1 {
            return None;
        }
        let (prefix, suffix) = pattern.split_once('*')?;
        Some(Self { prefix, suffix })
    }

    /// Return the text `*` stands for in `value`, if it matches.
    ///
    /// E.g., pattern `"./features/*"` with `"./features/foo"` returns `Some("foo")`.
    /// The capture may be empty.
    pub fn capture<'v>(&self, value: &'v str) -> Option<&'v str> {
        value.strip_prefix(self.prefix)?.strip_suffix(self.suffix)
    }

    /// Like [`Self::capture`], but an empty capture does not match.
    pub fn capture_non_empty<'v>(&self, value: &'v str) -> Option<&'v str> {
        self.capture(value).filter(|star_value| !star_value.is_empty())
    }

    /// Substitute `*` with `star_value`.
    pub fn substitute(&self, star_value: &str) -> String {
        format!("{}{star_value}{}", self.prefix, self.suffix)
    }
}

/// Order patterns most specific first: longest key, then lexicographic.
pub(crate) fn by_specificity(a: &str, b: &str) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}
