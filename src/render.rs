//! Drawing detection boxes and label tags onto a canonical image.

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Detection;

/// Border thickness of detection boxes, in pixels.
const BOX_THICKNESS: i32 = 2;

/// Text size of label tags, in pixels.
const LABEL_SCALE: f32 = 14.0;

/// Environment variable that overrides the label font search path.
const FONT_ENV: &str = "YOLOSCOPE_FONT";

/// System locations searched for a usable label font.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Color for a class index.
///
/// The color is a pure function of the index, so the same class maps to
/// the same color across runs, images and processes.
pub fn class_color(class_id: usize) -> Rgb<u8> {
    let mut rng = StdRng::seed_from_u64(class_id as u64);
    Rgb(rng.r#gen::<[u8; 3]>())
}

/// Find a TrueType font for label tags.
///
/// Checks the `YOLOSCOPE_FONT` variable first, then a handful of common
/// system locations. Fonts are licensed assets, so none is bundled.
pub fn load_label_font() -> anyhow::Result<FontVec> {
    if let Ok(path) = std::env::var(FONT_ENV) {
        let data = std::fs::read(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read font {}: {}", path, e))?;
        return FontVec::try_from_vec(data)
            .map_err(|_| anyhow::anyhow!("{} is not a usable font file", path));
    }

    for candidate in FONT_CANDIDATES {
        let Ok(data) = std::fs::read(candidate) else {
            continue;
        };
        if let Ok(font) = FontVec::try_from_vec(data) {
            log::debug!("using label font {}", candidate);
            return Ok(font);
        }
    }

    anyhow::bail!(
        "No label font found. Point the {} environment variable at a TrueType \
         font file (e.g. DejaVuSans.ttf).",
        FONT_ENV
    );
}

/// Draw every detection onto a fresh copy of `image`: a box in the class
/// color plus a filled tag carrying the label and confidence. The input
/// image is left untouched.
pub fn annotate(image: &RgbImage, detections: &[Detection], font: &FontVec) -> RgbImage {
    let mut canvas = image.clone();

    for detection in detections {
        let color = class_color(detection.class_id);
        let bbox = &detection.bbox;

        for inset in 0..BOX_THICKNESS {
            let width = bbox.width() - 2 * inset;
            let height = bbox.height() - 2 * inset;
            if width <= 0 || height <= 0 {
                break;
            }
            let rect =
                Rect::at(bbox.x1 + inset, bbox.y1 + inset).of_size(width as u32, height as u32);
            draw_hollow_rect_mut(&mut canvas, rect, color);
        }

        let text = format!("{}: {:.2}", detection.label, detection.confidence);
        let (text_width, text_height) = text_size(PxScale::from(LABEL_SCALE), font, &text);
        let tag_width = text_width + 8;
        let tag_height = text_height + 6;

        // Tag sits above the box; when the box touches the top edge the
        // tag drops inside it instead of being clipped away.
        let tag_x = bbox.x1.max(0);
        let mut tag_y = bbox.y1 - tag_height as i32;
        if tag_y < 0 {
            tag_y = bbox.y1.max(0);
        }

        draw_filled_rect_mut(
            &mut canvas,
            Rect::at(tag_x, tag_y).of_size(tag_width, tag_height),
            color,
        );
        draw_text_mut(
            &mut canvas,
            Rgb([255, 255, 255]),
            tag_x + 4,
            tag_y + 3,
            PxScale::from(LABEL_SCALE),
            font,
            &text,
        );
    }

    canvas
}
