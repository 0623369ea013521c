//! Tests for Label and Labels types

use crate::labels::{Label, Labels};

// =============================================================================
// Labels::get tests
// =============================================================================

#[test]
fn test_get_present_key() {
    let labels = Labels::from_pairs([("source", "hn"), ("type", "story")]);
    assert_eq!(labels.get("source"), "hn");
    assert_eq!(labels.get("type"), "story");
}

#[test]
fn test_get_missing_key_returns_empty() {
    let labels = Labels::from_pairs([("source", "hn")]);
    assert_eq!(labels.get("category"), "");
}

#[test]
fn test_get_on_empty_set() {
    let labels = Labels::new();
    assert_eq!(labels.get("anything"), "");
}

#[test]
fn test_get_empty_value_key() {
    let labels = Labels::from_pairs([("team", "")]);
    assert_eq!(labels.get("team"), "");
    assert!(labels.contains_key("team"));
    assert!(!labels.contains_key("other"));
}

#[test]
fn test_get_is_case_sensitive() {
    let labels = Labels::from_pairs([("Source", "hn")]);
    assert_eq!(labels.get("source"), "");
    assert_eq!(labels.get("Source"), "hn");
}

// =============================================================================
// Labels::put tests
// =============================================================================

#[test]
fn test_put_appends_new_key() {
    let mut labels = Labels::new();
    labels.put("source", "hn");
    labels.put("type", "story");
    assert_eq!(labels.len(), 2);
    assert_eq!(labels.get("type"), "story");
}

#[test]
fn test_put_replaces_existing_key() {
    let mut labels = Labels::from_pairs([("source", "hn"), ("type", "story")]);
    labels.put("source", "lobsters");
    assert_eq!(labels.len(), 2);
    assert_eq!(labels.get("source"), "lobsters");
}

#[test]
fn test_put_preserves_insertion_order() {
    let mut labels = Labels::new();
    labels.put("c", "3");
    labels.put("a", "1");
    labels.put("b", "2");
    // Replacing does not move the key
    labels.put("c", "30");

    let keys: Vec<&str> = labels.iter().map(|l| l.key.as_str()).collect();
    assert_eq!(keys, vec!["c", "a", "b"]);
}

#[test]
fn test_put_empty_value() {
    let mut labels = Labels::new();
    labels.put("team", "");
    assert_eq!(labels.len(), 1);
    assert!(labels.contains_key("team"));
}

// =============================================================================
// Display tests
// =============================================================================

#[test]
fn test_display_canonical_format() {
    let labels = Labels::from_pairs([("source", "hn"), ("type", "story")]);
    assert_eq!(labels.to_string(), "source=hn, type=story");
}

#[test]
fn test_display_single_label() {
    let labels = Labels::from_pairs([("source", "hn")]);
    assert_eq!(labels.to_string(), "source=hn");
}

#[test]
fn test_display_empty_set() {
    let labels = Labels::new();
    assert_eq!(labels.to_string(), "");
}

#[test]
fn test_display_empty_value() {
    let labels = Labels::from_pairs([("source", ""), ("type", "story")]);
    assert_eq!(labels.to_string(), "source=, type=story");
}

#[test]
fn test_display_order_sensitive() {
    let a = Labels::from_pairs([("x", "1"), ("y", "2")]);
    let b = Labels::from_pairs([("y", "2"), ("x", "1")]);
    assert_ne!(a.to_string(), b.to_string());
}

#[test]
fn test_label_display() {
    let label = Label::new("source", "hn");
    assert_eq!(label.to_string(), "source=hn");
}

// =============================================================================
// Construction and iteration tests
// =============================================================================

#[test]
fn test_from_pairs_preserves_order() {
    let labels = Labels::from_pairs([("z", "1"), ("a", "2"), ("m", "3")]);
    let keys: Vec<&str> = labels.iter().map(|l| l.key.as_str()).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_from_iterator_of_labels() {
    let labels: Labels = vec![Label::new("a", "1"), Label::new("b", "2")]
        .into_iter()
        .collect();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels.get("b"), "2");
}

#[test]
fn test_is_empty() {
    assert!(Labels::new().is_empty());
    assert!(!Labels::from_pairs([("a", "1")]).is_empty());
}

#[test]
fn test_into_iterator_by_ref() {
    let labels = Labels::from_pairs([("a", "1"), ("b", "2")]);
    let mut seen = Vec::new();
    for label in &labels {
        seen.push(label.key.clone());
    }
    assert_eq!(seen, vec!["a", "b"]);
}

// =============================================================================
// Serde tests
// =============================================================================

#[test]
fn test_labels_serialize_as_array() {
    let labels = Labels::from_pairs([("source", "hn")]);
    let json = serde_json::to_string(&labels).unwrap();
    assert_eq!(json, r#"[{"key":"source","value":"hn"}]"#);
}

#[test]
fn test_labels_deserialize_round_trip() {
    let labels = Labels::from_pairs([("source", "hn"), ("type", "story")]);
    let json = serde_json::to_string(&labels).unwrap();
    let back: Labels = serde_json::from_str(&json).unwrap();
    assert_eq!(back, labels);
}
