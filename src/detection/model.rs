use image::RgbImage;
use image::imageops::FilterType;
use rten::Model;
use rten_tensor::NdTensor;
use rten_tensor::prelude::*;
use std::path::{Path, PathBuf};

use super::RawDetection;

/// File name the detector looks for inside the cache directory.
const MODEL_FILE: &str = "yolov10n.rten";

/// Environment variable that overrides the model search path.
const MODEL_ENV: &str = "YOLOSCOPE_MODEL";

/// Settings for locating and driving the detection model.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Explicit model file path. When unset, the standard locations are
    /// searched instead.
    pub model_path: Option<PathBuf>,
    /// Square edge length of the model input tensor.
    pub input_size: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            input_size: 640,
        }
    }
}

impl DetectorConfig {
    /// Resolve the model file: explicit path, then the `YOLOSCOPE_MODEL`
    /// variable, then the standard cache location.
    fn resolve_model_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.model_path {
            return Ok(path.clone());
        }
        if let Ok(path) = std::env::var(MODEL_ENV) {
            return Ok(PathBuf::from(path));
        }

        let home_dir = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        let path = Path::new(&home_dir).join(".cache/yoloscope").join(MODEL_FILE);

        if !path.exists() {
            anyhow::bail!(
                "Detection model not found. Export an NMS-free YOLO model to ONNX and \
                 convert it with rten-convert:\n\
                 \n    pip install rten-convert\n    rten-convert yolov10n.onnx {}\n\
                 \nExpected location:\n  - {}\n\
                 \nAlternatively point the {} environment variable at a model file.",
                MODEL_FILE,
                path.display(),
                MODEL_ENV
            );
        }

        Ok(path)
    }
}

/// The pretrained object detector.
///
/// This is a thin shell around an NMS-free YOLO export running on the rten
/// runtime. Candidate selection and suppression happen inside the model
/// graph; the shell prepares the input tensor, filters the emitted records
/// by confidence, and rescales coordinates back to the source image.
pub struct ObjectDetector {
    model: Model,
    input_size: u32,
}

impl ObjectDetector {
    /// Load the model from its resolved location. Construction can be slow;
    /// callers are expected to do this once and cache the instance.
    pub fn load(config: &DetectorConfig) -> anyhow::Result<Self> {
        let model_path = config.resolve_model_path()?;
        log::info!("loading detection model from {}", model_path.display());

        let model = Model::load_file(&model_path)
            .map_err(|e| anyhow::anyhow!("Failed to load detection model: {}", e))?;

        Ok(Self {
            model,
            input_size: config.input_size,
        })
    }

    /// Run the model over an image and return the raw records whose
    /// confidence reaches `confidence_threshold`, in the order the model
    /// emitted them. Box coordinates are rescaled to `image` pixel space.
    pub fn detect(
        &self,
        image: &RgbImage,
        confidence_threshold: f32,
    ) -> anyhow::Result<Vec<RawDetection>> {
        let size = self.input_size;
        let resized = image::imageops::resize(image, size, size, FilterType::CatmullRom);

        // NCHW float input, scaled to [0, 1].
        let mut input = NdTensor::zeros([1, 3, size as usize, size as usize]);
        for (x, y, pixel) in resized.enumerate_pixels() {
            for channel in 0..3 {
                input[[0, channel, y as usize, x as usize]] = pixel[channel] as f32 / 255.0;
            }
        }

        let input_id = *self
            .model
            .input_ids()
            .first()
            .ok_or_else(|| anyhow::anyhow!("Detection model has no input node"))?;
        let output_id = *self
            .model
            .output_ids()
            .first()
            .ok_or_else(|| anyhow::anyhow!("Detection model has no output node"))?;

        let outputs = self
            .model
            .run(vec![(input_id, input.view().into())], &[output_id], None)
            .map_err(|e| anyhow::anyhow!("Inference failed: {}", e))?;

        let output = outputs
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("Inference produced no output"))?;
        let records: NdTensor<f32, 3> = output
            .try_into()
            .map_err(|_| anyhow::anyhow!("Model output is not a rank-3 float tensor"))?;

        if records.size(2) < 6 {
            anyhow::bail!("Unexpected model output shape {:?}", records.shape());
        }

        // Each record is [x1, y1, x2, y2, score, class] in model-input
        // coordinates.
        let (image_width, image_height) = image.dimensions();
        let scale_x = image_width as f32 / size as f32;
        let scale_y = image_height as f32 / size as f32;

        let mut raw = Vec::new();
        for row in 0..records.size(1) {
            let confidence = records[[0, row, 4]];
            if confidence < confidence_threshold {
                continue;
            }

            let class_id = records[[0, row, 5]] as usize;
            let x1 = (records[[0, row, 0]] * scale_x).clamp(0.0, image_width as f32);
            let y1 = (records[[0, row, 1]] * scale_y).clamp(0.0, image_height as f32);
            let x2 = (records[[0, row, 2]] * scale_x).clamp(0.0, image_width as f32);
            let y2 = (records[[0, row, 3]] * scale_y).clamp(0.0, image_height as f32);

            raw.push(RawDetection {
                bbox: [x1, y1, x2, y2],
                confidence,
                class_id,
            });
        }

        log::info!(
            "model emitted {} records at threshold {:.2}",
            raw.len(),
            confidence_threshold
        );
        Ok(raw)
    }
}
