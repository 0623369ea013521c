//! Tests for group types and their serialized shape

use chrono::{TimeZone, Utc};

use feedmux_model::{Feed, Labels};

use crate::feed::RoutedFeed;
use crate::group::{FeedGroup, Group};

fn sample_group() -> Group {
    let time = Utc.with_ymd_and_hms(2025, 8, 22, 10, 0, 0).unwrap();
    let feed = Feed::new(1, Labels::from_pairs([("source", "hn")]), time)
        .with_vectors(vec![vec![0.5; 4]]);

    Group {
        feed_group: FeedGroup {
            name: "daily-digest source=hn".to_string(),
            time,
            labels: Labels::from_pairs([("source", "hn")]),
            feeds: vec![RoutedFeed::representative(feed)],
        },
        receivers: vec!["email".to_string()],
    }
}

// =============================================================================
// Identity tests
// =============================================================================

#[test]
fn test_group_id_combines_name_and_time() {
    let group = sample_group();
    assert_eq!(group.id(), "daily-digest source=hn-2025-08-22T10:00:00Z");
}

#[test]
fn test_group_name_accessor() {
    let group = sample_group();
    assert_eq!(group.name(), "daily-digest source=hn");
}

#[test]
fn test_same_name_different_time_differs() {
    let mut a = sample_group();
    let b = sample_group();
    a.feed_group.time = Utc.with_ymd_and_hms(2025, 8, 23, 10, 0, 0).unwrap();
    assert_ne!(a.id(), b.id());
}

// =============================================================================
// Feed counting tests
// =============================================================================

#[test]
fn test_feed_count_includes_related() {
    let time = Utc::now();
    let mut representative =
        RoutedFeed::representative(Feed::new(1, Labels::new(), time));
    representative
        .related
        .push(RoutedFeed::representative(Feed::new(2, Labels::new(), time)));

    let group = FeedGroup {
        name: "r ".to_string(),
        time,
        labels: Labels::new(),
        feeds: vec![
            representative,
            RoutedFeed::representative(Feed::new(3, Labels::new(), time)),
        ],
    };

    assert_eq!(group.feed_count(), 3);
}

// =============================================================================
// Serde shape tests
// =============================================================================

#[test]
fn test_group_serializes_flattened() {
    let group = sample_group();
    let json = serde_json::to_value(&group).unwrap();

    // FeedGroup fields sit at the top level next to receivers
    assert_eq!(json["name"], "daily-digest source=hn");
    assert_eq!(json["receivers"][0], "email");
    assert!(json.get("feed_group").is_none());
}

#[test]
fn test_group_feeds_flatten_inner_feed() {
    let group = sample_group();
    let json = serde_json::to_value(&group).unwrap();

    let feed = &json["feeds"][0];
    assert_eq!(feed["id"], 1);
    assert!(feed["related"].as_array().unwrap().is_empty());
    assert!(feed.get("feed").is_none());
}

#[test]
fn test_group_never_serializes_vectors() {
    let group = sample_group();
    let json = serde_json::to_string(&group).unwrap();
    assert!(!json.contains("vectors"));
}
