//! Manual line assignment from human-labeled points.

use itertools::Itertools;

use crate::annot::LabeledPoint;
use crate::utils::BBox;

/// Strategy for boxes that contain points with more than one distinct
/// label - typically a tall region spanning several physical lines.
///
/// The resolver receives the box and its distinct labels (ascending) and
/// returns replacement rows; it may split the box, pick a label, or leave
/// it unassigned. Implemented as a seam so a proportional-split policy can
/// be added without touching callers.
pub trait AmbiguityPolicy {
    fn resolve(&self, bbox: BBox, labels: &[usize]) -> Vec<(BBox, Option<usize>)>;
}

/// Default policy: an ambiguous box stays whole and unassigned, leaving it
/// to the reviewer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaveUnassigned;

impl AmbiguityPolicy for LeaveUnassigned {
    fn resolve(&self, bbox: BBox, _labels: &[usize]) -> Vec<(BBox, Option<usize>)> {
        vec![(bbox, None)]
    }
}

/// Assigns boxes from labeled points.
///
/// A box is assigned if and only if exactly one distinct label falls inside
/// its rectangle (inclusive bounds). Boxes containing no labeled point stay
/// unassigned; boxes containing several distinct labels go through the
/// ambiguity policy. The result is total over the input boxes, though the
/// policy may replace one box with several rows.
pub fn assign_lines_manual(
    boxes: &[BBox],
    points: &[LabeledPoint],
    policy: &dyn AmbiguityPolicy,
) -> Vec<(BBox, Option<usize>)> {
    let mut out = Vec::with_capacity(boxes.len());
    for &bbox in boxes {
        let labels: Vec<usize> = points
            .iter()
            .filter(|p| bbox.contains(p.x, p.y))
            .map(|p| p.label)
            .sorted_unstable()
            .dedup()
            .collect();

        match labels.as_slice() {
            [] => out.push((bbox, None)),
            [label] => out.push((bbox, Some(*label))),
            _ => out.extend(policy.resolve(bbox, &labels)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64, label: usize) -> LabeledPoint {
        LabeledPoint { x, y, label }
    }

    #[test]
    fn single_label_assigns() {
        let boxes = [BBox::new(0, 0, 10, 10)];
        let points = [point(5.0, 5.0, 3), point(7.0, 7.0, 3)];
        let result = assign_lines_manual(&boxes, &points, &LeaveUnassigned);
        assert_eq!(result, vec![(boxes[0], Some(3))]);
    }

    #[test]
    fn multiple_distinct_labels_stay_unassigned() {
        let boxes = [BBox::new(0, 0, 10, 30)];
        let points = [point(5.0, 5.0, 3), point(5.0, 25.0, 4)];
        let result = assign_lines_manual(&boxes, &points, &LeaveUnassigned);
        assert_eq!(result, vec![(boxes[0], None)]);
    }

    #[test]
    fn no_points_stay_unassigned() {
        let boxes = [BBox::new(0, 0, 10, 10)];
        let result = assign_lines_manual(&boxes, &[point(50.0, 50.0, 1)], &LeaveUnassigned);
        assert_eq!(result, vec![(boxes[0], None)]);
    }

    #[test]
    fn border_points_count() {
        let boxes = [BBox::new(10, 10, 5, 5)];
        let result = assign_lines_manual(&boxes, &[point(15.0, 15.0, 2)], &LeaveUnassigned);
        assert_eq!(result, vec![(boxes[0], Some(2))]);
    }
}
