//! Compiled route tree
//!
//! The tree is compiled once from configuration. Matcher strings are
//! parsed, defaults are filled in, and thresholds are range-checked up
//! front, so per-feed resolution never fails and never allocates.
//!
//! Nodes live in a flat arena indexed by [`RouteId`]; parent-child links
//! are ids rather than references, so the compiled tree is `Clone` and
//! trivially shareable.

use feedmux_config::{RouteConfig, SubRouteConfig};
use feedmux_model::{LABEL_SOURCE, Labels};

use crate::error::{Result, RoutingError};
use crate::matcher::Matcher;
use crate::route_id::RouteId;

/// Compression threshold applied when a route does not set one
pub const DEFAULT_COMPRESS_THRESHOLD: f32 = 0.85;

/// One compiled route
///
/// Holds the effective settings after defaults: `group_by` falls back to
/// `["source"]` and the compression threshold to
/// [`DEFAULT_COMPRESS_THRESHOLD`]. The root node has no matchers.
#[derive(Debug, Clone)]
pub struct RouteNode {
    /// Parsed label predicates, all of which must hold (empty for root)
    matchers: Vec<Matcher>,

    /// Label keys that split this route's feeds into groups
    group_by: Vec<String>,

    /// Similarity threshold for collapsing near-duplicate feeds
    compress_threshold: f32,

    /// Receiver names notified for this route's groups
    receivers: Vec<String>,

    /// Child route ids, in declaration order
    children: Vec<RouteId>,
}

impl RouteNode {
    /// The matchers guarding this route
    #[inline]
    #[must_use]
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// The effective group-by keys
    #[inline]
    #[must_use]
    pub fn group_by(&self) -> &[String] {
        &self.group_by
    }

    /// The effective compression threshold
    #[inline]
    #[must_use]
    pub fn compress_threshold(&self) -> f32 {
        self.compress_threshold
    }

    /// Receiver names for this route
    #[inline]
    #[must_use]
    pub fn receivers(&self) -> &[String] {
        &self.receivers
    }

    /// Child route ids, in declaration order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[RouteId] {
        &self.children
    }

    /// Evaluate this route's own matchers against a label set (AND logic)
    #[must_use]
    pub fn matches(&self, labels: &Labels) -> bool {
        self.matchers.iter().all(|m| m.matches(labels))
    }

    /// Project a label set onto this route's group-by keys
    ///
    /// Keys keep their declaration order; a key absent from the input
    /// appears with an empty value. The canonical rendering of the result
    /// is the grouping key.
    #[must_use]
    pub fn group_labels(&self, labels: &Labels) -> Labels {
        let mut group = Labels::new();
        for key in &self.group_by {
            group.put(key.clone(), labels.get(key));
        }
        group
    }
}

/// Pre-compiled routing tree
///
/// Resolution walks children before the node itself, so the deepest
/// matching route wins and sibling order breaks ties. Feeds matching no
/// sub-route fall back to the root.
///
/// # Example
///
/// ```
/// use std::str::FromStr;
///
/// use feedmux_config::RouteConfig;
/// use feedmux_model::Labels;
/// use feedmux_routing::RouteTree;
///
/// let config = RouteConfig::from_str(
///     "[[sub_routes]]\nmatchers = [\"type=github\"]\nreceivers = [\"dev\"]",
/// )
/// .unwrap();
/// let tree = RouteTree::compile(&config).unwrap();
///
/// let github = tree.resolve(&Labels::from_pairs([("type", "github")]));
/// assert_ne!(github, RouteTree::ROOT);
///
/// let other = tree.resolve(&Labels::from_pairs([("type", "story")]));
/// assert_eq!(other, RouteTree::ROOT);
/// ```
#[derive(Debug, Clone)]
pub struct RouteTree {
    /// Arena of compiled routes; index 0 is the root
    nodes: Vec<RouteNode>,
}

impl RouteTree {
    /// Id of the root route
    pub const ROOT: RouteId = RouteId::new(0);

    /// Compile a route tree from configuration
    ///
    /// Parses every matcher string, applies defaults (`group_by` of
    /// `["source"]`, threshold of [`DEFAULT_COMPRESS_THRESHOLD`]) and
    /// validates thresholds against `0.0..=1.0`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending route's config path when a
    /// matcher does not parse, a sub-route has no matchers, or a
    /// threshold is out of range.
    pub fn compile(config: &RouteConfig) -> Result<Self> {
        let mut nodes = vec![RouteNode {
            matchers: Vec::new(),
            group_by: effective_group_by(&config.group_by),
            compress_threshold: effective_threshold(
                config.compress_by_related_threshold,
                "route",
            )?,
            receivers: config.receivers.clone(),
            children: Vec::new(),
        }];

        for (i, sub) in config.sub_routes.iter().enumerate() {
            let child = compile_sub(&mut nodes, sub, &format!("sub_routes[{i}]"))?;
            nodes[Self::ROOT.as_usize()].children.push(child);
        }

        tracing::debug!(routes = nodes.len(), "compiled notification route tree");

        Ok(Self { nodes })
    }

    /// Resolve a label set to its most specific matching route
    ///
    /// Children are tried before their parent and siblings in declaration
    /// order, matching the compile-time tree shape. Falls back to
    /// [`RouteTree::ROOT`] when nothing matches, so resolution is total.
    #[must_use]
    pub fn resolve(&self, labels: &Labels) -> RouteId {
        self.match_children(Self::ROOT, labels)
            .unwrap_or(Self::ROOT)
    }

    /// Look up a compiled route
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree.
    #[inline]
    #[must_use]
    pub fn node(&self, id: RouteId) -> &RouteNode {
        &self.nodes[id.as_usize()]
    }

    /// The root route
    #[inline]
    #[must_use]
    pub fn root(&self) -> &RouteNode {
        &self.nodes[Self::ROOT.as_usize()]
    }

    /// Number of compiled routes, root included
    #[inline]
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.nodes.len()
    }

    fn match_subtree(&self, id: RouteId, labels: &Labels) -> Option<RouteId> {
        if let Some(matched) = self.match_children(id, labels) {
            return Some(matched);
        }

        self.nodes[id.as_usize()].matches(labels).then_some(id)
    }

    fn match_children(&self, id: RouteId, labels: &Labels) -> Option<RouteId> {
        self.nodes[id.as_usize()]
            .children
            .iter()
            .find_map(|&child| self.match_subtree(child, labels))
    }
}

fn compile_sub(
    nodes: &mut Vec<RouteNode>,
    config: &SubRouteConfig,
    path: &str,
) -> Result<RouteId> {
    if config.matchers.is_empty() {
        return Err(RoutingError::missing_matchers(path));
    }

    let matchers = config
        .matchers
        .iter()
        .map(|raw| Matcher::parse(raw))
        .collect::<Result<Vec<_>>>()?;

    let index = nodes.len();
    if index > RouteId::MAX as usize {
        return Err(RoutingError::TooManyRoutes {
            limit: RouteId::MAX as usize,
        });
    }
    let id = RouteId::new(index as u16);

    nodes.push(RouteNode {
        matchers,
        group_by: effective_group_by(&config.group_by),
        compress_threshold: effective_threshold(config.compress_by_related_threshold, path)?,
        receivers: config.receivers.clone(),
        children: Vec::new(),
    });

    for (i, sub) in config.sub_routes.iter().enumerate() {
        let child = compile_sub(nodes, sub, &format!("{path}.sub_routes[{i}]"))?;
        nodes[id.as_usize()].children.push(child);
    }

    Ok(id)
}

fn effective_group_by(keys: &[String]) -> Vec<String> {
    if keys.is_empty() {
        vec![LABEL_SOURCE.to_string()]
    } else {
        keys.to_vec()
    }
}

fn effective_threshold(value: Option<f32>, route: &str) -> Result<f32> {
    let threshold = value.unwrap_or(DEFAULT_COMPRESS_THRESHOLD);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(RoutingError::invalid_threshold(route, threshold));
    }

    Ok(threshold)
}
