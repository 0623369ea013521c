//! Tests for the Feed type

use chrono::{TimeZone, Utc};

use crate::{Feed, LABEL_SOURCE, Labels};

fn sample_feed() -> Feed {
    Feed::new(
        42,
        Labels::from_pairs([(LABEL_SOURCE, "hn"), ("type", "story")]),
        Utc.with_ymd_and_hms(2025, 8, 22, 10, 0, 0).unwrap(),
    )
}

// =============================================================================
// Construction tests
// =============================================================================

#[test]
fn test_new_has_no_vectors() {
    let feed = sample_feed();
    assert_eq!(feed.id, 42);
    assert!(feed.vectors.is_empty());
}

#[test]
fn test_with_vectors() {
    let feed = sample_feed().with_vectors(vec![vec![0.1, 0.2], vec![0.3, 0.4]]);
    assert_eq!(feed.vectors.len(), 2);
    assert_eq!(feed.vectors[0], vec![0.1, 0.2]);
}

#[test]
fn test_source_accessor() {
    let feed = sample_feed();
    assert_eq!(feed.source(), "hn");

    let unsourced = Feed::new(1, Labels::new(), Utc::now());
    assert_eq!(unsourced.source(), "");
}

// =============================================================================
// Serde tests
// =============================================================================

#[test]
fn test_serialize_skips_vectors() {
    let feed = sample_feed().with_vectors(vec![vec![1.0; 8]]);
    let json = serde_json::to_string(&feed).unwrap();
    assert!(json.contains("\"id\":42"));
    assert!(json.contains("\"labels\""));
    assert!(!json.contains("vectors"));
}

#[test]
fn test_serialize_time_rfc3339() {
    let feed = sample_feed();
    let json = serde_json::to_string(&feed).unwrap();
    assert!(json.contains("2025-08-22T10:00:00Z"));
}

#[test]
fn test_deserialize_defaults_vectors_empty() {
    let json = r#"{
        "id": 7,
        "labels": [{"key": "source", "value": "rss"}],
        "time": "2025-08-22T10:00:00Z"
    }"#;
    let feed: Feed = serde_json::from_str(json).unwrap();
    assert_eq!(feed.id, 7);
    assert_eq!(feed.source(), "rss");
    assert!(feed.vectors.is_empty());
}
