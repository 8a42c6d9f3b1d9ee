//! Integration tests for box and label rendering.
//!
//! Tests cover:
//! - Per-class color determinism
//! - The annotation pass working on a copy
//! - Degenerate boxes not breaking the drawing code
//!
//! Tests that rasterize text skip themselves when no system font is
//! available.

mod common;

use common::*;
use image::{ImageBuffer, Rgb, RgbImage};
use yoloscope::{BoundingBox, annotate, class_color, load_label_font};

#[test]
fn test_class_color_is_stable_per_class() {
    for class_id in [0usize, 1, 16, 79, 200] {
        assert_eq!(class_color(class_id), class_color(class_id));
    }
}

#[test]
fn test_class_colors_spread_across_classes() {
    let distinct: std::collections::HashSet<[u8; 3]> =
        (0..80).map(|id| class_color(id).0).collect();
    // A stray collision among 80 classes would be tolerable; everything
    // landing on a handful of colors would not.
    assert!(distinct.len() > 70);
}

#[test]
fn test_annotate_leaves_input_untouched() {
    let Ok(font) = load_label_font() else {
        return;
    };

    let source: RgbImage = ImageBuffer::from_fn(300, 300, |_, _| Rgb([8u8, 8u8, 8u8]));
    let pristine = source.clone();
    let detections = vec![make_detection("person", 0, 0.87)];

    let annotated = annotate(&source, &detections, &font);

    assert_eq!(source, pristine);
    assert_eq!(annotated.dimensions(), source.dimensions());
    assert_ne!(annotated, source);
}

#[test]
fn test_annotate_without_detections_is_a_copy() {
    let Ok(font) = load_label_font() else {
        return;
    };

    let source: RgbImage = ImageBuffer::from_fn(300, 300, |x, y| Rgb([x as u8, y as u8, 0u8]));
    let annotated = annotate(&source, &[], &font);

    assert_eq!(annotated, source);
}

#[test]
fn test_annotate_handles_degenerate_boxes() {
    let Ok(font) = load_label_font() else {
        return;
    };

    let source: RgbImage = ImageBuffer::from_fn(300, 300, |_, _| Rgb([30u8, 30u8, 30u8]));

    // A 1px box touching the top edge, and a box spanning the full frame.
    let mut tiny = make_detection("person", 0, 0.5);
    tiny.bbox = BoundingBox::new(150, 0, 151, 1);
    tiny.area = tiny.bbox.area();
    let mut full = make_detection("dog", 16, 0.5);
    full.bbox = BoundingBox::new(0, 0, 300, 300);
    full.area = full.bbox.area();

    let annotated = annotate(&source, &[tiny, full], &font);
    assert_eq!(annotated.dimensions(), (300, 300));
}
