pub mod detection;
pub mod ingest;
pub mod models;
pub mod render;
pub mod session;
pub mod summary;

pub use detection::{
    CONFIDENCE_THRESHOLD, DetectorConfig, ObjectDetector, RawDetection, class_label,
    map_detections,
};
pub use ingest::{CANONICAL_SIZE, LoadedImage, load_canonical};
pub use models::{BoundingBox, Detection};
pub use render::{annotate, class_color, load_label_font};
pub use session::{DetectionOutcome, DetectionSession};
pub use summary::{ClassStat, DISTINCT_CLASS_GOAL, Summary};

#[cfg(feature = "gui")]
pub mod gui;
