//! First-letter report shared by both persistence backends.
//!
//! The prefix of a text is its first `char` passed through
//! [`char::to_uppercase`], i.e. the Unicode default case mapping with no
//! locale tailoring. Empty texts have no prefix and are left out.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Returns the uppercased first character of `text`, if any.
#[must_use]
pub fn prefix_of(text: &str) -> Option<String> {
    text.chars().next().map(|c| c.to_uppercase().collect())
}

/// Counts per uppercased first letter, iterated in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixCounts(BTreeMap<String, u64>);

impl PrefixCounts {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies the prefixes of every text.
    pub fn tally<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = Self::new();
        for prefix in texts.into_iter().filter_map(prefix_of) {
            counts.add(prefix, 1);
        }
        counts
    }

    /// Adds `count` to the tally for `prefix`.
    pub fn add(&mut self, prefix: impl Into<String>, count: u64) {
        *self.0.entry(prefix.into()).or_default() += count;
    }

    /// Returns the count for one prefix.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<u64> {
        self.0.get(prefix).copied()
    }

    /// Iterates the prefixes in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates `(prefix, count)` pairs in ascending prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the report, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, u64> {
        self.0
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for PrefixCounts {
    fn from_iter<T: IntoIterator<Item = (K, u64)>>(iter: T) -> Self {
        let mut counts = Self::new();
        for (prefix, count) in iter {
            counts.add(prefix, count);
        }
        counts
    }
}
