//! Similarity compression
//!
//! Collapses near-duplicate feeds within one label bucket. Feeds are
//! taken in arrival order; each is compared against the representatives
//! kept so far and absorbed by the first one scoring at or above the
//! route's threshold. Feeds absorbing nothing become representatives
//! themselves, so every input feed appears exactly once in the output.

use feedmux_model::{Feed, Labels};

use crate::error::{NotifyError, Result};
use crate::feed::RoutedFeed;
use crate::score::RelatedScorer;

#[cfg(test)]
#[path = "compress_test.rs"]
mod tests;

/// Compress a label bucket's feeds into representatives
///
/// `group` is the bucket's canonical labels, used only for error
/// context. Representatives keep their vectors for later comparisons;
/// absorbed feeds are stored with vectors dropped.
///
/// # Errors
///
/// The first scorer error aborts compression and is returned wrapped
/// with the group, feed, and representative it occurred on.
pub fn compress<S: RelatedScorer>(
    group: &Labels,
    threshold: f32,
    feeds: Vec<Feed>,
    scorer: &S,
) -> Result<Vec<RoutedFeed>> {
    let feed_count = feeds.len();
    let mut representatives: Vec<RoutedFeed> = Vec::with_capacity(feed_count / 2);

    for feed in feeds {
        match find_absorbing(group, &representatives, &feed, threshold, scorer)? {
            Some(at) => representatives[at].related.push(RoutedFeed::collapsed(feed)),
            None => representatives.push(RoutedFeed::representative(feed)),
        }
    }

    tracing::trace!(
        group = %group,
        feeds = feed_count,
        representatives = representatives.len(),
        "compressed label bucket"
    );

    Ok(representatives)
}

/// Find the first representative similar enough to absorb `feed`
fn find_absorbing<S: RelatedScorer>(
    group: &Labels,
    representatives: &[RoutedFeed],
    feed: &Feed,
    threshold: f32,
    scorer: &S,
) -> Result<Option<usize>> {
    for (at, representative) in representatives.iter().enumerate() {
        let score = scorer
            .related_score(&representative.feed.vectors, &feed.vectors)
            .map_err(|e| {
                NotifyError::related_score(
                    group.to_string(),
                    feed.id,
                    representative.feed.id,
                    e,
                )
            })?;

        if score >= threshold {
            return Ok(Some(at));
        }
    }

    Ok(None)
}
