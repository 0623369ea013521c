//! Feedmux Model - Core types for the feedmux notification router
//!
//! This crate provides the foundational types that flow through the routing
//! pipeline:
//! - `Labels` - Ordered label set attached to every feed
//! - `Feed` - One classified content item (labels + embedding vectors)
//! - `Vectors` - Embedding representation, one vector per indexed field
//!
//! # Design Principles
//!
//! - **Plain data**: No interior mutability, no lifecycle - values are built
//!   upstream, routed, and serialized downstream
//! - **Deterministic rendering**: `Labels` renders to a canonical string
//!   used as a grouping key, so iteration order is always insertion order
//! - **Vectors never serialize**: embedding data stays inside the process;
//!   every serialized shape omits it

mod feed;
mod labels;
pub mod time;

pub use feed::{Feed, Vectors};
pub use labels::{Label, Labels};

/// Label key carrying the feed's origin (site, list, or scrape target).
pub const LABEL_SOURCE: &str = "source";

/// Label key carrying the classified content type.
pub const LABEL_TYPE: &str = "type";

/// Label key carrying the feed's display title.
pub const LABEL_TITLE: &str = "title";

/// Label key carrying the feed's canonical link.
pub const LABEL_LINK: &str = "link";

// Test modules - only compiled during testing
#[cfg(test)]
mod feed_test;
#[cfg(test)]
mod labels_test;
