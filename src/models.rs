/// Axis-aligned bounding box in canonical image pixel coordinates.
///
/// Coordinates follow the model convention: (x1, y1) is the top-left corner,
/// (x2, y2) the bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoundingBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Area in pixels, `(x2 - x1) * (y2 - y1)`.
    pub fn area(&self) -> i32 {
        self.width() * self.height()
    }
}

/// One detected object, as mapped from a raw model output record.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Human-readable class name (COCO label, or "unknown" for an
    /// out-of-range class id).
    pub label: String,
    /// Class index reported by the model; also drives the box color.
    pub class_id: usize,
    /// Confidence score in [0, 1].
    pub confidence: f32,
    /// Box in canonical image coordinates.
    pub bbox: BoundingBox,
    /// Derived pixel area of the box.
    pub area: i32,
}
