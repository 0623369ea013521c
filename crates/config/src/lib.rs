//! Feedmux Configuration
//!
//! TOML-based configuration for the notification routing tree.
//! Minimal config should just work - an empty document yields the root
//! route with all defaults, and every field can be omitted.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use feedmux_config::RouteConfig;
//! use std::str::FromStr;
//!
//! let config = RouteConfig::from_str("receivers = [\"email\"]").unwrap();
//! assert_eq!(config.receivers, vec!["email"]);
//! ```
//!
//! # Example Config
//!
//! ```toml
//! group_by = ["source"]
//! receivers = ["default-email"]
//!
//! [[sub_routes]]
//! matchers = ["type=github"]
//! group_by = ["type", "title"]
//! receivers = ["dev-webhook"]
//! ```
//!
//! This crate is a pure deserialization surface. Semantic checks (matcher
//! syntax, threshold ranges) happen when the tree is compiled by the
//! routing layer, so a parsed config is well-formed TOML but not yet
//! known to be routable.

mod error;
mod route;

pub use error::{ConfigError, Result};
pub use route::{RouteConfig, SubRouteConfig};
