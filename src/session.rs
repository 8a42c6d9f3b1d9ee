//! Session state shared by the viewer: the loaded image, the cached
//! detector and the detections of the latest run.

use std::path::Path;

use image::RgbImage;

use crate::detection::{CONFIDENCE_THRESHOLD, DetectorConfig, ObjectDetector, map_detections};
use crate::ingest;
use crate::models::Detection;

/// What a detection request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionOutcome {
    /// No image is loaded; nothing ran and no state changed.
    NoImage,
    /// The model ran and the session holds the fresh results.
    Completed,
}

/// Everything a detection run needs and produces.
///
/// The session knows nothing about windows or widgets, so the whole
/// load-detect-summarize flow can be driven headless.
pub struct DetectionSession {
    current_image: Option<RgbImage>,
    detections: Vec<Detection>,
    detector: Option<ObjectDetector>,
    config: DetectorConfig,
}

impl DetectionSession {
    pub fn new() -> Self {
        Self::with_config(DetectorConfig::default())
    }

    pub fn with_config(config: DetectorConfig) -> Self {
        Self {
            current_image: None,
            detections: Vec::new(),
            detector: None,
            config,
        }
    }

    /// Load and canonicalize an image, replacing the current one. Stale
    /// detections are dropped before the new image lands, so the session
    /// never pairs an image with another image's results.
    ///
    /// Returns the source dimensions of the picked file.
    pub fn load_image(&mut self, path: &Path) -> anyhow::Result<(u32, u32)> {
        let loaded = ingest::load_canonical(path)?;
        self.detections.clear();
        self.current_image = Some(loaded.image);
        Ok((loaded.source_width, loaded.source_height))
    }

    /// Run the detector over the current image.
    ///
    /// Without an image this is a guarded no-op that touches nothing,
    /// not even the model. When inference fails the previous detections
    /// stay in place.
    pub fn run_detection(&mut self) -> anyhow::Result<DetectionOutcome> {
        if self.current_image.is_none() {
            return Ok(DetectionOutcome::NoImage);
        }

        // The model is loaded on first use and kept for later runs. A
        // failed load leaves the slot empty so the next request retries.
        if self.detector.is_none() {
            self.detector = Some(ObjectDetector::load(&self.config)?);
        }

        let raw = match (&self.current_image, &self.detector) {
            (Some(image), Some(detector)) => detector.detect(image, CONFIDENCE_THRESHOLD)?,
            _ => return Ok(DetectionOutcome::NoImage),
        };

        self.detections = map_detections(&raw);
        Ok(DetectionOutcome::Completed)
    }

    /// The canonical image of the latest successful load, unannotated.
    pub fn current_image(&self) -> Option<&RgbImage> {
        self.current_image.as_ref()
    }

    /// Detections of the latest completed run, in model emission order.
    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }

    pub fn has_image(&self) -> bool {
        self.current_image.is_some()
    }

    /// Whether the model has been loaded in this session.
    pub fn has_detector(&self) -> bool {
        self.detector.is_some()
    }
}

impl Default for DetectionSession {
    fn default() -> Self {
        Self::new()
    }
}
