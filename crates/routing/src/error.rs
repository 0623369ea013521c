//! Routing error types

use thiserror::Error;

/// Result type for routing operations
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Errors that can occur during route tree compilation
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Matcher string is not `key=value` or `key!=value`
    #[error("invalid matcher '{matcher}': expected 'key=value' or 'key!=value'")]
    InvalidMatcher {
        /// The offending matcher string
        matcher: String,
    },

    /// Sub-route declared without matchers
    #[error("route '{route}' requires at least one matcher")]
    MissingMatchers {
        /// Config path of the offending route
        route: String,
    },

    /// Compression threshold outside the unit interval
    #[error("route '{route}' has invalid compress_by_related_threshold {value}: must be within 0.0..=1.0")]
    InvalidThreshold {
        /// Config path of the offending route
        route: String,
        /// The out-of-range value
        value: f32,
    },

    /// Route tree exceeds the id space
    #[error("route tree has more than {limit} routes")]
    TooManyRoutes {
        /// Maximum number of routes supported
        limit: usize,
    },
}

impl RoutingError {
    /// Create an InvalidMatcher error
    #[inline]
    pub fn invalid_matcher(matcher: impl Into<String>) -> Self {
        Self::InvalidMatcher {
            matcher: matcher.into(),
        }
    }

    /// Create a MissingMatchers error
    #[inline]
    pub fn missing_matchers(route: impl Into<String>) -> Self {
        Self::MissingMatchers {
            route: route.into(),
        }
    }

    /// Create an InvalidThreshold error
    #[inline]
    pub fn invalid_threshold(route: impl Into<String>, value: f32) -> Self {
        Self::InvalidThreshold {
            route: route.into(),
            value,
        }
    }
}
