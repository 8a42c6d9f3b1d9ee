//! Object detection over canonical images.
//!
//! The model is treated as a black box: it receives an image and yields
//! scored, classified boxes. Everything here is the plumbing around that
//! boundary, plus the class-label table and the algorithm notes shown in
//! the viewer.

pub mod classes;
pub mod describe;
pub mod model;

pub use classes::{COCO_CLASSES, class_label};
pub use model::{DetectorConfig, ObjectDetector};

use crate::models::{BoundingBox, Detection};

/// Minimum confidence a model record must reach to be kept.
pub const CONFIDENCE_THRESHOLD: f32 = 0.25;

/// A record as emitted by the model shell: box corners, score and class
/// index, before labels are attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDetection {
    /// Box corners as `[x1, y1, x2, y2]` in source-image pixels.
    pub bbox: [f32; 4],
    /// Confidence score in `[0, 1]`.
    pub confidence: f32,
    /// Class index into the label table.
    pub class_id: usize,
}

/// Convert raw model records into display records, one per input and in
/// the same order. Coordinates are rounded to whole pixels and every
/// record gets its label and box area attached.
pub fn map_detections(raw: &[RawDetection]) -> Vec<Detection> {
    raw.iter()
        .map(|record| {
            let [x1, y1, x2, y2] = record.bbox;
            let bbox = BoundingBox::new(
                x1.round() as i32,
                y1.round() as i32,
                x2.round() as i32,
                y2.round() as i32,
            );
            Detection {
                label: class_label(record.class_id).to_string(),
                class_id: record.class_id,
                confidence: record.confidence,
                area: bbox.area(),
                bbox,
            }
        })
        .collect()
}
