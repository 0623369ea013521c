//! Similarity scorer trait
//!
//! Defines the abstract interface the compression step uses to decide
//! whether two feeds are near-duplicates. The score function is supplied
//! by the embedding layer so it always agrees with the vector index that
//! produced the feeds.
//!
//! # Example Implementation
//!
//! ```
//! use feedmux_model::Vectors;
//! use feedmux_notify::{RelatedScorer, ScoreResult};
//!
//! struct MaxCosineScorer;
//!
//! impl RelatedScorer for MaxCosineScorer {
//!     fn related_score(&self, a: &Vectors, b: &Vectors) -> ScoreResult<f32> {
//!         // Compare each vector pair, keep the best score
//!         # let _ = (a, b);
//!         Ok(0.0)
//!     }
//! }
//! ```

use feedmux_model::Vectors;

/// Error type for similarity scoring
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// Vector dimensions disagree with the index
    #[error("vector dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Dimension of the left operand
        left: usize,
        /// Dimension of the right operand
        right: usize,
    },

    /// Feed carries no vectors to compare
    #[error("feed has no embedding vectors")]
    MissingVectors,

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Result type for scoring operations
pub type ScoreResult<T> = Result<T, ScoreError>;

/// Trait for similarity scorers
///
/// Implementations must be Send + Sync so a router can be shared across
/// threads. Scores are expected in `0.0..=1.0` with higher meaning more
/// similar; the compression step compares them against a route's
/// threshold.
pub trait RelatedScorer: Send + Sync {
    /// Score how related two feeds are, given their embedding vectors
    ///
    /// The first operand is the retained representative, the second the
    /// incoming candidate.
    fn related_score(&self, a: &Vectors, b: &Vectors) -> ScoreResult<f32>;
}
