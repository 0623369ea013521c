//! Label-based grouping
//!
//! Splits one route's feeds into buckets keyed by the route's group-by
//! labels. Bucket identity is the canonical label rendering, so feeds
//! agreeing on every group-by key land together regardless of their
//! other labels.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use feedmux_model::{Feed, Labels};
use feedmux_routing::RouteNode;

#[cfg(test)]
#[path = "grouping_test.rs"]
mod tests;

/// One label bucket within a route
#[derive(Debug, Clone)]
pub struct LabelBucket {
    /// The group-by label subset shared by every feed in the bucket
    pub labels: Labels,

    /// Feeds in arrival order
    pub feeds: Vec<Feed>,
}

/// Bucket feeds by the route's group-by labels
///
/// Buckets come back in first-seen order, with each bucket's feeds in
/// arrival order. Feeds missing a group-by key still bucket (the key
/// reads as empty), so every input feed lands in exactly one bucket.
#[must_use]
pub fn group_by_labels(route: &RouteNode, feeds: Vec<Feed>) -> Vec<LabelBucket> {
    let mut buckets: Vec<LabelBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for feed in feeds {
        let labels = route.group_labels(&feed.labels);
        match index.entry(labels.to_string()) {
            Entry::Occupied(at) => buckets[*at.get()].feeds.push(feed),
            Entry::Vacant(slot) => {
                slot.insert(buckets.len());
                buckets.push(LabelBucket {
                    labels,
                    feeds: vec![feed],
                });
            }
        }
    }

    buckets
}
