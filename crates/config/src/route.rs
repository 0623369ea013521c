//! Routing tree configuration
//!
//! Declares how notification feeds are routed. The root route holds
//! defaults; sub-routes refine them with label matchers. Sub-routes are
//! evaluated in order with deeper routes taking precedence, so the most
//! specific declaration wins.
//!
//! # Example
//!
//! ```toml
//! group_by = ["source"]
//! receivers = ["default-email"]
//!
//! [[sub_routes]]
//! matchers = ["type=github"]
//! receivers = ["dev-webhook"]
//!
//! [[sub_routes.sub_routes]]
//! matchers = ["repo=feedmux"]
//! group_by = ["repo", "title"]
//! compress_by_related_threshold = 0.9
//! receivers = ["feedmux-channel"]
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Root of the routing tree
///
/// Every field is optional. Omitted `group_by` and
/// `compress_by_related_threshold` values are filled in with defaults when
/// the tree is compiled, not at parse time, so a freshly parsed config
/// reflects exactly what the file said.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Label keys that split this route's feeds into notification groups
    pub group_by: Vec<String>,

    /// Similarity threshold above which two feeds collapse into one
    /// notification entry (0.0 ..= 1.0)
    pub compress_by_related_threshold: Option<f32>,

    /// Receiver names notified for groups produced by this route
    pub receivers: Vec<String>,

    /// Child routes, evaluated in order (first match wins)
    pub sub_routes: Vec<SubRouteConfig>,
}

impl RouteConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::io(path.display().to_string(), e))?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    ///
    /// Prefer using the `FromStr` trait implementation.
    fn parse(s: &str) -> Result<Self> {
        let config: RouteConfig = toml::from_str(s).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Check if any sub-routes are configured
    pub fn has_sub_routes(&self) -> bool {
        !self.sub_routes.is_empty()
    }
}

impl FromStr for RouteConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A child route carrying label matchers
///
/// Matchers use `key=value` (equality) or `key!=value` (inequality)
/// syntax. A feed matches the route only when every matcher holds.
/// Matcher strings are kept verbatim here; syntax is checked when the
/// tree is compiled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubRouteConfig {
    /// Label predicates, all of which must hold (AND logic)
    pub matchers: Vec<String>,

    /// Label keys that split this route's feeds into notification groups
    pub group_by: Vec<String>,

    /// Similarity threshold above which two feeds collapse into one
    /// notification entry (0.0 ..= 1.0)
    pub compress_by_related_threshold: Option<f32>,

    /// Receiver names notified for groups produced by this route
    pub receivers: Vec<String>,

    /// Child routes, evaluated in order before this route's own matchers
    pub sub_routes: Vec<SubRouteConfig>,
}

impl SubRouteConfig {
    /// Check if any sub-routes are configured
    pub fn has_sub_routes(&self) -> bool {
        !self.sub_routes.is_empty()
    }
}
