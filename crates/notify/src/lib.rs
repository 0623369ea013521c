//! Feedmux - Notify
//!
//! Routing, grouping, and compression of feed batches into notification
//! groups.
//!
//! # Overview
//!
//! A rule evaluation produces a batch of feeds. This crate decides who
//! hears about them and in what shape:
//!
//! - Route each feed to the most specific matching route in the tree
//! - Group the feeds on each route by the route's `group_by` labels
//! - Collapse near-duplicate feeds inside each group under a single
//!   representative
//! - Emit one [`Group`] per (route, label-bucket) pair, name-sorted,
//!   addressed to the route's receivers
//!
//! The whole pass is synchronous and pure: no I/O, no clocks, no
//! delivery. Similarity is delegated to a caller-supplied
//! [`RelatedScorer`], so the routing logic stays independent of any
//! particular embedding backend.
//!
//! # Architecture
//!
//! ```text
//! [Feeds] → [RouteTree::resolve] → [group_by_labels] → [compress] → [Groups]
//! ```
//!
//! The [`Router`] struct owns the compiled tree and the scorer and runs
//! the stages in order. Each stage is also exported on its own for
//! callers that want to run them separately.
//!
//! # Modules
//!
//! - `router` - End-to-end routing pass over a feed batch
//! - `grouping` - Label-bucket partitioning within a route
//! - `compress` - Greedy similarity compression of a bucket
//! - `score` - The `RelatedScorer` seam
//! - `group` / `feed` - Output types
//!
//! # Example
//!
//! ```ignore
//! use feedmux_config::RouteConfig;
//! use feedmux_notify::Router;
//!
//! let config: RouteConfig = std::fs::read_to_string("route.toml")?.parse()?;
//! let router = Router::from_config(&config, scorer)?;
//!
//! let groups = router.route("daily-digest", Utc::now(), feeds)?;
//! for group in &groups {
//!     println!("{} -> {:?}", group.name(), group.receivers);
//! }
//! ```

mod compress;
mod error;
mod feed;
mod group;
mod grouping;
mod router;
mod score;

pub use compress::compress;
pub use error::{NotifyError, Result};
pub use feed::RoutedFeed;
pub use group::{FeedGroup, Group};
pub use grouping::{group_by_labels, LabelBucket};
pub use router::Router;
pub use score::{RelatedScorer, ScoreError, ScoreResult};

// Re-export the routing surface so callers can build a router without
// depending on the lower crates directly
pub use feedmux_config::RouteConfig;
pub use feedmux_routing::{RouteId, RouteTree};
