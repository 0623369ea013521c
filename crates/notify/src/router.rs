//! Notification router
//!
//! Owns the compiled route tree and the similarity scorer, and turns a
//! batch of rule-matched feeds into sorted notification groups.
//!
//! # Architecture
//!
//! ```text
//! [feeds] → resolve route → bucket by labels → compress → [Groups]
//! ```
//!
//! Every step is pure and synchronous. Resolution cannot fail; the only
//! runtime error source is the scorer, and its first error aborts the
//! whole batch so partial output is never emitted.

use chrono::{DateTime, Utc};

use feedmux_config::RouteConfig;
use feedmux_model::Feed;
use feedmux_routing::{RouteId, RouteTree};

use crate::compress::compress;
use crate::error::Result;
use crate::group::{FeedGroup, Group};
use crate::grouping::group_by_labels;
use crate::score::RelatedScorer;

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;

/// Routes feeds into notification groups
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use feedmux_config::RouteConfig;
/// use feedmux_model::{Feed, Labels, Vectors};
/// use feedmux_notify::{RelatedScorer, Router, ScoreResult};
///
/// struct NeverRelated;
///
/// impl RelatedScorer for NeverRelated {
///     fn related_score(&self, _: &Vectors, _: &Vectors) -> ScoreResult<f32> {
///         Ok(0.0)
///     }
/// }
///
/// let router = Router::from_config(&RouteConfig::default(), NeverRelated).unwrap();
/// let feeds = vec![Feed::new(1, Labels::from_pairs([("source", "hn")]), Utc::now())];
///
/// let groups = router.route("daily-digest", Utc::now(), feeds).unwrap();
/// assert_eq!(groups[0].name(), "daily-digest source=hn");
/// ```
#[derive(Debug, Clone)]
pub struct Router<S> {
    /// Compiled routing tree
    tree: RouteTree,

    /// Similarity scorer supplied by the embedding layer
    scorer: S,
}

impl<S: RelatedScorer> Router<S> {
    /// Create a router from an already compiled tree
    pub fn new(tree: RouteTree, scorer: S) -> Self {
        Self { tree, scorer }
    }

    /// Compile `config` and create a router
    ///
    /// # Errors
    ///
    /// Returns the compilation error if the config holds an invalid
    /// matcher, a matcher-less sub-route, or an out-of-range threshold.
    pub fn from_config(config: &RouteConfig, scorer: S) -> Result<Self> {
        let tree = RouteTree::compile(config)?;
        Ok(Self::new(tree, scorer))
    }

    /// The compiled route tree
    #[inline]
    pub fn tree(&self) -> &RouteTree {
        &self.tree
    }

    /// Route one batch of feeds into notification groups
    ///
    /// Each feed is resolved to its most specific route, bucketed by the
    /// route's group-by labels, and compressed against the route's
    /// threshold. One group is emitted per non-empty (route, bucket)
    /// pair, named `"{rule} {labels}"` and carrying the route's
    /// receivers. Groups come back sorted by name, so output order is
    /// stable for a given input.
    ///
    /// # Errors
    ///
    /// A scorer failure anywhere aborts the batch; no groups are
    /// returned.
    pub fn route(
        &self,
        rule: &str,
        time: DateTime<Utc>,
        feeds: Vec<Feed>,
    ) -> Result<Vec<Group>> {
        let feed_count = feeds.len();

        let mut by_route: Vec<Vec<Feed>> = vec![Vec::new(); self.tree.route_count()];
        for feed in feeds {
            let id = self.tree.resolve(&feed.labels);
            by_route[id.as_usize()].push(feed);
        }

        let mut groups = Vec::new();
        for (index, routed) in by_route.into_iter().enumerate() {
            if routed.is_empty() {
                continue;
            }

            let node = self.tree.node(RouteId::new(index as u16));
            for bucket in group_by_labels(node, routed) {
                let representatives = compress(
                    &bucket.labels,
                    node.compress_threshold(),
                    bucket.feeds,
                    &self.scorer,
                )?;

                groups.push(Group {
                    feed_group: FeedGroup {
                        name: format!("{rule} {}", bucket.labels),
                        time,
                        labels: bucket.labels,
                        feeds: representatives,
                    },
                    receivers: node.receivers().to_vec(),
                });
            }
        }

        groups.sort_by(|a, b| a.name().cmp(b.name()));

        tracing::debug!(
            rule,
            feeds = feed_count,
            groups = groups.len(),
            "routed feeds into notification groups"
        );

        Ok(groups)
    }
}
