//! Grouped statistics over a detection run and their text rendering.

use crate::models::Detection;

/// Number of distinct classes a scene should reach to pass.
pub const DISTINCT_CLASS_GOAL: usize = 5;

/// Width of the table body, excluding the frame and its padding spaces.
const INNER_WIDTH: usize = 32;

/// Per-class aggregate: how often the class appeared and its best score.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassStat {
    pub label: String,
    pub count: usize,
    pub max_confidence: f32,
}

/// Aggregated view over one detection run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Per-class rows, most frequent first. Classes with equal counts
    /// keep the order in which they first appeared.
    pub classes: Vec<ClassStat>,
    pub total: usize,
    pub distinct: usize,
    pub mean_confidence: f32,
}

impl Summary {
    /// Group detections by class label and compute the run statistics.
    pub fn from_detections(detections: &[Detection]) -> Self {
        let mut classes: Vec<ClassStat> = Vec::new();
        for detection in detections {
            match classes.iter_mut().find(|stat| stat.label == detection.label) {
                Some(stat) => {
                    stat.count += 1;
                    if detection.confidence > stat.max_confidence {
                        stat.max_confidence = detection.confidence;
                    }
                }
                None => classes.push(ClassStat {
                    label: detection.label.clone(),
                    count: 1,
                    max_confidence: detection.confidence,
                }),
            }
        }

        // Stable sort keeps first-seen order among equal counts.
        classes.sort_by(|a, b| b.count.cmp(&a.count));

        let total = detections.len();
        let mean_confidence = if total == 0 {
            0.0
        } else {
            detections.iter().map(|d| d.confidence).sum::<f32>() / total as f32
        };

        Self {
            distinct: classes.len(),
            classes,
            total,
            mean_confidence,
        }
    }

    /// Whether the run reached the distinct-class goal.
    pub fn has_enough_classes(&self) -> bool {
        self.distinct >= DISTINCT_CLASS_GOAL
    }

    /// Render the bordered results table, or the instructional placeholder
    /// when there is nothing to show.
    pub fn render(&self) -> String {
        if self.total == 0 {
            return Self::placeholder();
        }

        let mut lines = Vec::new();
        lines.push(border('╔', '═', '╗'));
        lines.push(framed(&center("DETECTION RESULTS")));
        lines.push(border('╠', '═', '╣'));
        lines.push(framed(&format!(
            "{:<18}{:>6}{:>8}",
            "CLASS", "COUNT", "CONF"
        )));
        lines.push(border('╟', '─', '╢'));
        for stat in &self.classes {
            lines.push(framed(&format!(
                "{:<18.17}{:>6}{:>8.2}",
                stat.label, stat.count, stat.max_confidence
            )));
        }
        lines.push(border('╠', '═', '╣'));
        lines.push(framed(&format!("TOTAL: {} objects", self.total)));
        lines.push(framed(&format!("DISTINCT CLASSES: {}", self.distinct)));
        lines.push(framed(&format!(
            "MEAN CONFIDENCE: {:.2}",
            self.mean_confidence
        )));
        lines.push(border('╟', '─', '╢'));
        if self.has_enough_classes() {
            lines.push(framed(&format!(
                "✓ GOAL MET: {}+ distinct classes",
                DISTINCT_CLASS_GOAL
            )));
        } else {
            lines.push(framed(&format!(
                "✗ GOAL: {}+ classes (now {})",
                DISTINCT_CLASS_GOAL, self.distinct
            )));
        }
        lines.push(border('╚', '═', '╝'));
        lines.join("\n")
    }

    fn placeholder() -> String {
        let mut lines = Vec::new();
        lines.push(border('╔', '═', '╗'));
        lines.push(framed(&center("RESULT TABLE")));
        lines.push(framed(&center("(no detections yet)")));
        lines.push(border('╚', '═', '╝'));
        lines.push(String::new());
        lines.push("1. Pick an image with 'Load Image'".to_string());
        lines.push("2. Press 'Run Detection'".to_string());
        lines.push(String::new());
        lines.push("The table lists every detected".to_string());
        lines.push("class with its count and best".to_string());
        lines.push("confidence score.".to_string());
        lines.join("\n")
    }
}

fn border(left: char, fill: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for _ in 0..INNER_WIDTH + 2 {
        line.push(fill);
    }
    line.push(right);
    line
}

fn framed(content: &str) -> String {
    let pad = INNER_WIDTH.saturating_sub(content.chars().count());
    format!("║ {}{} ║", content, " ".repeat(pad))
}

fn center(content: &str) -> String {
    let len = content.chars().count();
    if len >= INNER_WIDTH {
        return content.to_string();
    }
    format!("{}{}", " ".repeat((INNER_WIDTH - len) / 2), content)
}
