//! Ordered label sets
//!
//! Labels carry all feed metadata as flat `key=value` pairs. Order is
//! preserved so that rendering a label set is deterministic, which the
//! routing layer relies on for grouping keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single `key=value` pair attached to a feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name (e.g. `source`, `type`)
    pub key: String,

    /// Label value, may be empty
    pub value: String,
}

impl Label {
    /// Create a new label
    #[inline]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// An ordered set of labels
///
/// Insertion order is preserved and drives the canonical string rendering,
/// so two label sets built with the same keys in the same order always
/// render identically.
///
/// # Example
///
/// ```
/// use feedmux_model::Labels;
///
/// let mut labels = Labels::new();
/// labels.put("source", "hn");
/// labels.put("type", "story");
/// assert_eq!(labels.to_string(), "source=hn, type=story");
/// assert_eq!(labels.get("source"), "hn");
/// assert_eq!(labels.get("missing"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(Vec<Label>);

impl Labels {
    /// Create an empty label set
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a label set from `(key, value)` pairs, preserving order
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| Label::new(k, v))
                .collect(),
        )
    }

    /// Look up a label value by key
    ///
    /// Returns the empty string when the key is absent, so callers can
    /// compare values without an `Option` dance.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|l| l.key == key)
            .map_or("", |l| l.value.as_str())
    }

    /// Check whether a key is present (even with an empty value)
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|l| l.key == key)
    }

    /// Set a label value, replacing an existing key or appending a new one
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|l| l.key == key) {
            Some(existing) => existing.value = value,
            None => self.0.push(Label { key, value }),
        }
    }

    /// Iterate over labels in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.0.iter()
    }

    /// Number of labels
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no labels
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Labels {
    /// Canonical rendering: `key=value` pairs joined by `", "`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{label}")?;
        }
        Ok(())
    }
}

impl From<Vec<Label>> for Labels {
    fn from(labels: Vec<Label>) -> Self {
        Self(labels)
    }
}

impl FromIterator<Label> for Labels {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Labels {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Labels {
    type Item = Label;
    type IntoIter = std::vec::IntoIter<Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
