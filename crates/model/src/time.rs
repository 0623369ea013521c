//! Timestamp formatting
//!
//! All user-visible timestamps (group ids, notification bodies) render
//! through [`format`] so the whole pipeline agrees on one representation.

use chrono::{DateTime, SecondsFormat, Utc};

/// Render a timestamp as RFC 3339 with second precision, UTC `Z` suffix.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2025, 8, 22, 10, 0, 0).unwrap();
/// assert_eq!(feedmux_model::time::format(t), "2025-08-22T10:00:00Z");
/// ```
#[must_use]
pub fn format(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
