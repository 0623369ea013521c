//! Notification pipeline error types

use thiserror::Error;

use crate::score::ScoreError;

/// Result type for notification routing operations
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Errors that can occur while routing a batch of feeds
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Route tree compilation failed
    #[error("failed to compile route tree: {0}")]
    Compile(#[from] feedmux_routing::RoutingError),

    /// Similarity scoring failed during compression
    #[error("failed scoring feed {feed} against representative {representative} in group '{group}': {source}")]
    RelatedScore {
        /// Canonical labels of the group being compressed
        group: String,
        /// Id of the incoming feed
        feed: u64,
        /// Id of the representative it was compared against
        representative: u64,
        /// Underlying scorer error
        #[source]
        source: ScoreError,
    },
}

impl NotifyError {
    /// Create a RelatedScore error
    pub fn related_score(
        group: impl Into<String>,
        feed: u64,
        representative: u64,
        source: ScoreError,
    ) -> Self {
        Self::RelatedScore {
            group: group.into(),
            feed,
            representative,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_related_score_error_context() {
        let err = NotifyError::related_score(
            "source=hn",
            7,
            3,
            ScoreError::DimensionMismatch { left: 768, right: 512 },
        );
        let msg = err.to_string();
        assert!(msg.contains("source=hn"));
        assert!(msg.contains("feed 7"));
        assert!(msg.contains("representative 3"));
    }

    #[test]
    fn test_compile_error_wraps_routing() {
        let routing = feedmux_routing::RoutingError::invalid_matcher("a=b=c");
        let err = NotifyError::from(routing);
        assert!(err.to_string().contains("failed to compile route tree"));
        assert!(err.to_string().contains("a=b=c"));
    }
}
