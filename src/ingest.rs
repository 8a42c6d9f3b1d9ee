use anyhow::Context;
use image::imageops::FilterType;
use image::{GenericImageView, ImageReader, RgbImage};
use std::path::Path;

/// Side length of the canonical working bitmap. Every loaded image is
/// resampled to this fixed square before detection and rendering.
pub const CANONICAL_SIZE: u32 = 300;

/// A decoded image in canonical form, plus the dimensions it had on disk.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// The canonical 300x300 RGB bitmap.
    pub image: RgbImage,
    /// Width of the source file before resampling.
    pub source_width: u32,
    /// Height of the source file before resampling.
    pub source_height: u32,
}

/// Decode an image file and resample it to the canonical resolution.
///
/// The decoder sniffs the actual content rather than trusting the file
/// extension, so a misnamed file still loads as long as the bytes are a
/// valid raster image. Invalid or unreadable files produce an error and no
/// state change for the caller.
pub fn load_canonical(path: &Path) -> anyhow::Result<LoadedImage> {
    let decoded = ImageReader::open(path)
        .with_context(|| format!("Failed to open image file: {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read image file: {}", path.display()))?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    let (source_width, source_height) = decoded.dimensions();

    let image = image::imageops::resize(
        &decoded.to_rgb8(),
        CANONICAL_SIZE,
        CANONICAL_SIZE,
        FilterType::CatmullRom,
    );

    Ok(LoadedImage {
        image,
        source_width,
        source_height,
    })
}
