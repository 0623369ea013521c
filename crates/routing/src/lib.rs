//! Feedmux Routing
//!
//! Pre-compiled route trees mapping feed label sets to notification routes.
//! All parsing and validation happens at compile time, not per-feed.
//!
//! # Design
//!
//! Routing decisions are prepared at config load time. `RouteTree::compile`
//! parses every matcher, fills in defaults, and lays the tree out in a flat
//! arena, so resolving a feed is a pure tree walk over pre-built state.
//!
//! Resolution prefers depth: a feed matching both a route and one of its
//! sub-routes lands in the sub-route. Sibling routes are tried in
//! declaration order, and feeds matching nothing fall back to the root.
//!
//! # Example
//!
//! ```
//! use std::str::FromStr;
//!
//! use feedmux_config::RouteConfig;
//! use feedmux_model::Labels;
//! use feedmux_routing::RouteTree;
//!
//! let config = RouteConfig::from_str(
//!     r#"
//! receivers = ["default-email"]
//!
//! [[sub_routes]]
//! matchers = ["source=github"]
//! receivers = ["dev-webhook"]
//! "#,
//! )
//! .unwrap();
//!
//! let tree = RouteTree::compile(&config).unwrap();
//! let id = tree.resolve(&Labels::from_pairs([("source", "github")]));
//! assert_eq!(tree.node(id).receivers(), ["dev-webhook"]);
//! ```

mod error;
mod matcher;
mod route_id;
mod tree;


pub use error::{Result, RoutingError};
pub use matcher::Matcher;
pub use route_id::RouteId;
pub use tree::{DEFAULT_COMPRESS_THRESHOLD, RouteNode, RouteTree};

// Re-export the config types for convenience
pub use feedmux_config::{RouteConfig, SubRouteConfig};
