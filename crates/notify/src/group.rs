//! Notification group types
//!
//! The router's output: one `Group` per (route, label-bucket) pair,
//! carrying the compressed feeds and the receivers to notify.

use chrono::{DateTime, Utc};
use serde::Serialize;

use feedmux_model::{Labels, time};

use crate::feed::RoutedFeed;

#[cfg(test)]
#[path = "group_test.rs"]
mod tests;

/// A labelled bundle of compressed feeds
///
/// `name` is the rule name joined with the canonical label rendering by
/// a single space, which makes names unique per (rule, label-bucket) and
/// gives the final output its sort order.
#[derive(Debug, Clone, Serialize)]
pub struct FeedGroup {
    /// Composite group name: `"{rule} {labels}"`
    pub name: String,

    /// Evaluation time of the batch this group came from
    pub time: DateTime<Utc>,

    /// The group-by label subset shared by every feed in the group
    pub labels: Labels,

    /// Compressed feeds: representatives with their related lists
    pub feeds: Vec<RoutedFeed>,
}

impl FeedGroup {
    /// Stable group identity: `"{name}-{formatted time}"`
    ///
    /// Downstream delivery uses this to deduplicate re-evaluations of the
    /// same rule window.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}-{}", self.name, time::format(self.time))
    }

    /// Total feeds carried, related entries included
    #[must_use]
    pub fn feed_count(&self) -> usize {
        self.feeds.iter().map(RoutedFeed::feed_count).sum()
    }
}

/// A feed group addressed to its receivers
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    /// The grouped feeds
    #[serde(flatten)]
    pub feed_group: FeedGroup,

    /// Receiver names this group should be delivered to
    pub receivers: Vec<String>,
}

impl Group {
    /// Stable group identity, delegating to [`FeedGroup::id`]
    #[must_use]
    pub fn id(&self) -> String {
        self.feed_group.id()
    }

    /// The composite group name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.feed_group.name
    }
}
