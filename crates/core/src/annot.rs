//! Point/label annotation parsing.
//!
//! Annotations arrive as two parallel text files: one `"x y"` row per point
//! and one label per corresponding row. A case-insensitive label of "none"
//! marks a point as unlabeled; such points are excluded from the result.

use crate::error::{Result, SegError};
use crate::utils::Point;

/// A human-placed point carrying a line label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledPoint {
    pub x: f64,
    pub y: f64,
    pub label: usize,
}

/// Parses a points file: one `"x y"` pair per non-blank line.
pub fn parse_points(src: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (lineno, line) in src.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let (Some(xs), Some(ys), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(SegError::MalformedPoint {
                line: lineno + 1,
                text: line.to_string(),
            });
        };
        let (Ok(x), Ok(y)) = (xs.parse::<f64>(), ys.parse::<f64>()) else {
            return Err(SegError::MalformedPoint {
                line: lineno + 1,
                text: line.to_string(),
            });
        };
        points.push((x, y));
    }
    Ok(points)
}

/// Parses a labels file: one label per non-blank line.
///
/// `"none"` (any case) means unlabeled and maps to None.
pub fn parse_labels(src: &str) -> Result<Vec<Option<usize>>> {
    let mut labels = Vec::new();
    for (lineno, line) in src.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("none") {
            labels.push(None);
            continue;
        }
        let Ok(label) = line.parse::<usize>() else {
            return Err(SegError::MalformedLabel {
                line: lineno + 1,
                text: line.to_string(),
            });
        };
        labels.push(Some(label));
    }
    Ok(labels)
}

/// Parses both files and zips them into labeled points, dropping unlabeled
/// entries. The two files must describe the same number of rows.
pub fn parse_annotations(points_src: &str, labels_src: &str) -> Result<Vec<LabeledPoint>> {
    let points = parse_points(points_src)?;
    let labels = parse_labels(labels_src)?;
    if points.len() != labels.len() {
        return Err(SegError::AnnotationMismatch {
            points: points.len(),
            labels: labels.len(),
        });
    }

    Ok(points
        .into_iter()
        .zip(labels)
        .filter_map(|((x, y), label)| label.map(|label| LabeledPoint { x, y, label }))
        .collect())
}
