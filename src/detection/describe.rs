//! Static description of the detection algorithm for the GUI text pane.
//!
//! The algorithm itself lives entirely inside the pretrained model; this
//! module only describes it.

/// Shown in the algorithm pane before the first detection run.
pub const ALGORITHM_PLACEHOLDER: &str = "\
Run detection to see a description of the
algorithm here.

YOLO (You Only Look Once):
A deep learning algorithm for real-time
object detection in a single forward pass.";

/// Shown in the algorithm pane after every detection run.
pub const ALGORITHM_OVERVIEW: &str = "\
╔═══════════════════════════════════════════╗
║            THE YOLO ALGORITHM             ║
╚═══════════════════════════════════════════╝

OVERVIEW:
YOLO (You Only Look Once) is a deep learning
algorithm that processes an image in a single
forward pass, predicting object locations and
classes at the same time.

ALGORITHM STEPS:
1. The image is divided into an SxS grid
2. Each cell predicts candidate boxes with
   confidence scores
3. Class probabilities are computed per cell
4. Overlapping candidates are suppressed
5. Final detections are returned
   (box + class + confidence)

FORMULAS:
- Confidence = P(Object) x IOU(pred, truth)
- Class Score = P(Class | Object) x Confidence
- IOU = Intersection Area / Union Area

MODEL IN USE:
- YOLOv10n (nano), NMS-free export
- Candidate selection runs inside the model
  graph; this application only filters the
  emitted records by confidence
- 80 COCO classes
- Confidence threshold: 0.25

REFERENCES:
1. Redmon et al. (2016), You Only Look Once
2. Redmon & Farhadi (2018), YOLOv3
3. Wang et al. (2024), YOLOv10";
