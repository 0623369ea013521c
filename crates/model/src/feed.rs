//! Feed item type
//!
//! A `Feed` is one classified content item flowing through the router. It
//! carries an id, its label set, the time it was scraped, and the embedding
//! vectors produced by the semantic index.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{LABEL_SOURCE, Labels};

/// Embedding representation of a feed, one vector per indexed field.
///
/// Vectors are process-internal: every serialized shape skips them.
pub type Vectors = Vec<Vec<f32>>;

/// One classified content item.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use feedmux_model::{Feed, Labels};
///
/// let feed = Feed::new(1, Labels::from_pairs([("source", "hn")]), Utc::now());
/// assert_eq!(feed.source(), "hn");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    /// Stable item identifier assigned at scrape time
    pub id: u64,

    /// All metadata as ordered `key=value` pairs
    pub labels: Labels,

    /// Scrape time
    pub time: DateTime<Utc>,

    /// Embedding vectors, never serialized
    #[serde(skip)]
    pub vectors: Vectors,
}

impl Feed {
    /// Create a feed without vectors
    pub fn new(id: u64, labels: Labels, time: DateTime<Utc>) -> Self {
        Self {
            id,
            labels,
            time,
            vectors: Vec::new(),
        }
    }

    /// Attach embedding vectors
    #[must_use]
    pub fn with_vectors(mut self, vectors: Vectors) -> Self {
        self.vectors = vectors;
        self
    }

    /// The feed's origin, from the `source` label
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        self.labels.get(LABEL_SOURCE)
    }
}
