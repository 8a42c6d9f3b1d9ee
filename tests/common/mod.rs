mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from yoloscope for tests
pub use yoloscope::{BoundingBox, Detection, RawDetection};
