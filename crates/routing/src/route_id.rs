//! Route identifier type
//!
//! `RouteId` is a lightweight, Copy identifier for compiled routes.
//! Designed for allocation-free lookup in the per-batch path.

use std::fmt;

/// Route identifier within a compiled tree
///
/// A lightweight handle that identifies a node in the route tree.
/// Designed to be `Copy` and fit in a register, so per-feed resolution
/// never touches the heap.
///
/// # Example
///
/// ```
/// use feedmux_routing::RouteId;
///
/// let route = RouteId::new(0);
/// let copy = route;  // Copy, not move
/// assert_eq!(route, copy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(u16);

impl RouteId {
    /// Maximum route index supported
    pub const MAX: u16 = u16::MAX;

    /// Create a new route ID from a numeric index
    ///
    /// Route IDs are assigned sequentially during tree compilation.
    #[inline]
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the numeric index of this route
    #[inline]
    #[must_use]
    pub const fn index(self) -> u16 {
        self.0
    }

    /// Get the index as usize (for array indexing)
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route:{}", self.0)
    }
}

impl From<u16> for RouteId {
    #[inline]
    fn from(index: u16) -> Self {
        Self::new(index)
    }
}

impl From<RouteId> for u16 {
    #[inline]
    fn from(id: RouteId) -> Self {
        id.0
    }
}

impl From<RouteId> for usize {
    #[inline]
    fn from(id: RouteId) -> Self {
        id.0 as usize
    }
}
