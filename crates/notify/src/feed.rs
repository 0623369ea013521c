//! Routed feed type
//!
//! A `RoutedFeed` is a feed as it appears in notification output: either
//! a representative that survived compression, or a near-duplicate
//! collapsed under one.

use serde::Serialize;

use feedmux_model::Feed;

/// A feed in compressed notification output
///
/// Representatives keep their embedding vectors so later feeds can be
/// compared against them; collapsed feeds drop theirs and never nest
/// further (`related` stays empty one level down).
///
/// Serializes as the inner feed's fields plus `related`; vectors are
/// never part of the wire shape.
#[derive(Debug, Clone, Serialize)]
pub struct RoutedFeed {
    /// The feed itself
    #[serde(flatten)]
    pub feed: Feed,

    /// Near-duplicates absorbed by this feed
    pub related: Vec<RoutedFeed>,
}

impl RoutedFeed {
    /// Wrap a feed as a group representative, keeping its vectors
    #[must_use]
    pub fn representative(feed: Feed) -> Self {
        Self {
            feed,
            related: Vec::new(),
        }
    }

    /// Wrap a feed absorbed by a representative, dropping its vectors
    #[must_use]
    pub(crate) fn collapsed(mut feed: Feed) -> Self {
        feed.vectors = Vec::new();
        Self {
            feed,
            related: Vec::new(),
        }
    }

    /// Total feeds carried: this one plus everything absorbed
    #[must_use]
    pub fn feed_count(&self) -> usize {
        1 + self.related.len()
    }
}
