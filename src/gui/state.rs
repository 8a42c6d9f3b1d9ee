use ab_glyph::FontVec;
use iced::widget::image as iced_image;

use crate::detection::describe;
use crate::ingest::CANONICAL_SIZE;
use crate::session::DetectionSession;
use crate::summary::Summary;

/// Fill color of the image pane before anything is loaded.
const EMPTY_PANE_RGB: [u8; 3] = [0x4a, 0x90, 0xd9];

/// Everything the viewer shows, plus the session driving it.
pub struct AppState {
    pub session: DetectionSession,
    /// Label font, found lazily on the first detection run.
    pub label_font: Option<FontVec>,
    /// Pixels currently shown in the image pane.
    pub display: iced_image::Handle,
    pub status: String,
    pub algorithm_text: &'static str,
    pub results_text: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: DetectionSession::new(),
            label_font: None,
            display: empty_pane_handle(),
            status: String::from("No image loaded yet."),
            algorithm_text: describe::ALGORITHM_PLACEHOLDER,
            results_text: Summary::from_detections(&[]).render(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Solid-color placeholder matching the canonical image size.
fn empty_pane_handle() -> iced_image::Handle {
    let [r, g, b] = EMPTY_PANE_RGB;
    let mut pixels = Vec::with_capacity((CANONICAL_SIZE * CANONICAL_SIZE * 4) as usize);
    for _ in 0..CANONICAL_SIZE * CANONICAL_SIZE {
        pixels.extend_from_slice(&[r, g, b, 0xff]);
    }
    iced_image::Handle::from_pixels(CANONICAL_SIZE, CANONICAL_SIZE, pixels)
}
