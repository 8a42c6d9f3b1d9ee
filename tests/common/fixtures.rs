use image::{ImageBuffer, Rgb};
use tempfile::NamedTempFile;
use yoloscope::{BoundingBox, Detection, RawDetection};

/// Creates a solid-color test image of the given size and returns the
/// temp file. The file is cleaned up when the handle drops.
pub fn create_test_image(width: u32, height: u32) -> NamedTempFile {
    let img = ImageBuffer::from_fn(width, height, |_, _| Rgb([40u8, 120u8, 200u8]));
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Creates a temp file whose bytes are not a decodable image, despite
/// the extension.
pub fn create_bogus_image() -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".jpg")
        .tempfile()
        .expect("Failed to create temp file");
    std::fs::write(file.path(), b"definitely not an image")
        .expect("Failed to write temp file");
    file
}

/// Creates a display detection with the given label and confidence and a
/// fixed box.
pub fn make_detection(label: &str, class_id: usize, confidence: f32) -> Detection {
    let bbox = BoundingBox::new(10, 10, 60, 90);
    Detection {
        label: label.to_string(),
        class_id,
        confidence,
        area: bbox.area(),
        bbox,
    }
}

/// Creates a raw model record.
pub fn make_raw(bbox: [f32; 4], confidence: f32, class_id: usize) -> RawDetection {
    RawDetection {
        bbox,
        confidence,
        class_id,
    }
}
