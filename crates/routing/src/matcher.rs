//! Label matchers
//!
//! A matcher is a single predicate over one label key, written as
//! `key=value` (equality) or `key!=value` (inequality). Routes combine
//! matchers with AND logic.

use std::fmt;

use feedmux_model::Labels;

use crate::error::{Result, RoutingError};

const EQUAL: &str = "=";
const NOT_EQUAL: &str = "!=";

/// A parsed label predicate
///
/// Lookup uses [`Labels::get`] semantics: an absent key reads as the
/// empty string. So `team!=infra` matches feeds without a `team` label,
/// and `team=` matches exactly those feeds.
///
/// # Example
///
/// ```
/// use feedmux_model::Labels;
/// use feedmux_routing::Matcher;
///
/// let m = Matcher::parse("type!=job").unwrap();
/// assert!(m.matches(&Labels::from_pairs([("type", "story")])));
/// assert!(!m.matches(&Labels::from_pairs([("type", "job")])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    key: String,
    value: String,
    equal: bool,
}

impl Matcher {
    /// Parse a matcher string
    ///
    /// The string must split into exactly one key and one value around a
    /// single `!=` or `=`. The inequality operator is tried first, so
    /// `a!=b` is an inequality rather than an equality on key `a!`.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidMatcher`] when the string does not
    /// split into exactly two parts (e.g. `a=b=c`, `plain`, the empty
    /// string).
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split(NOT_EQUAL).collect();
        let (key, value, equal) = match parts.as_slice() {
            [key, value] => (*key, *value, false),
            _ => {
                let parts: Vec<&str> = raw.split(EQUAL).collect();
                match parts.as_slice() {
                    [key, value] => (*key, *value, true),
                    _ => return Err(RoutingError::invalid_matcher(raw)),
                }
            }
        };

        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
            equal,
        })
    }

    /// Evaluate the predicate against a label set
    #[must_use]
    pub fn matches(&self, labels: &Labels) -> bool {
        let value = labels.get(&self.key);
        if self.equal {
            value == self.value
        } else {
            value != self.value
        }
    }

    /// The label key this matcher inspects
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value compared against
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this is an equality (`=`) rather than inequality (`!=`) match
    #[inline]
    #[must_use]
    pub fn is_equality(&self) -> bool {
        self.equal
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = if self.equal { EQUAL } else { NOT_EQUAL };
        write!(f, "{}{}{}", self.key, op, self.value)
    }
}
