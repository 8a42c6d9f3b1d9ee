//! Integration tests for the grouped detection summary.
//!
//! Tests cover:
//! - Per-class counts and best confidence
//! - Ordering by count with first-seen tie order
//! - Totals, mean confidence and the distinct-class goal
//! - Table and placeholder rendering

mod common;

use common::*;
use yoloscope::{DISTINCT_CLASS_GOAL, Summary, class_label};

#[test]
fn test_grouping_counts_and_max_confidence() {
    let detections = vec![
        make_detection("person", 0, 0.9),
        make_detection("person", 0, 0.6),
        make_detection("dog", 16, 0.8),
    ];

    let summary = Summary::from_detections(&detections);

    assert_eq!(summary.total, 3);
    assert_eq!(summary.distinct, 2);
    assert!((summary.mean_confidence - 0.766_666_7).abs() < 1e-4);
    assert!(!summary.has_enough_classes());

    assert_eq!(summary.classes.len(), 2);
    assert_eq!(summary.classes[0].label, "person");
    assert_eq!(summary.classes[0].count, 2);
    assert!((summary.classes[0].max_confidence - 0.9).abs() < f32::EPSILON);
    assert_eq!(summary.classes[1].label, "dog");
    assert_eq!(summary.classes[1].count, 1);
    assert!((summary.classes[1].max_confidence - 0.8).abs() < f32::EPSILON);
}

#[test]
fn test_sorting_by_count_keeps_first_seen_tie_order() {
    let detections = vec![
        make_detection("cat", 15, 0.5),
        make_detection("dog", 16, 0.6),
        make_detection("bird", 14, 0.7),
        make_detection("dog", 16, 0.4),
    ];

    let summary = Summary::from_detections(&detections);

    let labels: Vec<&str> = summary.classes.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["dog", "cat", "bird"]);
}

#[test]
fn test_goal_reached_at_five_distinct_classes() {
    let detections: Vec<_> = ["person", "car", "dog", "cat", "chair"]
        .iter()
        .enumerate()
        .map(|(i, label)| make_detection(label, i, 0.5))
        .collect();

    let summary = Summary::from_detections(&detections);

    assert_eq!(summary.distinct, DISTINCT_CLASS_GOAL);
    assert!(summary.has_enough_classes());
}

#[test]
fn test_rendered_table_lists_classes_and_totals() {
    let detections = vec![
        make_detection("person", 0, 0.9),
        make_detection("person", 0, 0.6),
        make_detection("dog", 16, 0.8),
    ];

    let table = Summary::from_detections(&detections).render();

    assert!(table.contains("DETECTION RESULTS"));
    assert!(table.contains("person"));
    assert!(table.contains("0.90"));
    assert!(table.contains("dog"));
    assert!(table.contains("TOTAL: 3 objects"));
    assert!(table.contains("DISTINCT CLASSES: 2"));
    assert!(table.contains("MEAN CONFIDENCE: 0.77"));
    assert!(table.contains("✗"));
    assert!(!table.contains("no detections yet"));
}

#[test]
fn test_goal_line_flips_with_enough_classes() {
    let detections: Vec<_> = (0..6)
        .map(|i| make_detection(class_label(i), i, 0.5))
        .collect();

    let table = Summary::from_detections(&detections).render();

    assert!(table.contains("✓"));
    assert!(!table.contains("✗"));
}

#[test]
fn test_empty_run_renders_placeholder() {
    let summary = Summary::from_detections(&[]);

    assert_eq!(summary.total, 0);
    assert_eq!(summary.distinct, 0);

    let rendered = summary.render();
    assert!(rendered.contains("no detections yet"));
    assert!(!rendered.contains("TOTAL:"));
}
