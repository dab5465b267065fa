//! Tests for automatic and manual line assignment.

use scriptorium_core::SegParams;
use scriptorium_core::annot::LabeledPoint;
use scriptorium_core::layout::baselines::Baselines;
use scriptorium_core::layout::{LeaveUnassigned, assign_lines_auto, assign_lines_manual};
use scriptorium_core::utils::BBox;

fn skewed_baselines() -> Baselines {
    // The page sags to the right by ~12 px per line.
    Baselines {
        left: vec![100.0, 200.0, 300.0],
        right: vec![112.0, 212.0, 312.0],
        mid: vec![106.0, 206.0, 306.0],
        full: vec![106.0, 206.0, 306.0],
        x_left: 50.0,
        x_right: 950.0,
        x_mid: 500.0,
    }
}

#[test]
fn assignment_is_deterministic_and_total() {
    let baselines = skewed_baselines();
    let boxes: Vec<BBox> = (0..30)
        .map(|i| BBox::new(50 + (i % 6) * 150, 90 + (i / 6) * 50, 40, 16))
        .collect();
    let params = SegParams::default();

    let first = assign_lines_auto(&boxes, &baselines, &params);
    let second = assign_lines_auto(&boxes, &baselines, &params);
    assert_eq!(first, second);
    assert_eq!(first.len(), boxes.len());
}

#[test]
fn skew_is_followed_across_the_page() {
    let baselines = skewed_baselines();
    let params = SegParams::default();
    // Line 1 at the far left sits near 200; at the far right near 212.
    let left_box = BBox::new(50, 192, 40, 16); // mid_y = 200
    let right_box = BBox::new(950, 204, 40, 16); // mid_y = 212
    let lines = assign_lines_auto(&[left_box, right_box], &baselines, &params);
    assert_eq!(lines, vec![Some(1), Some(1)]);
}

#[test]
fn boxes_beyond_the_gate_stay_unassigned() {
    let baselines = skewed_baselines();
    let params = SegParams::default();
    // Midway between lines 0 and 1: 50 px from either blended baseline.
    let stray = BBox::new(50, 142, 40, 16); // mid_y = 150
    let near = BBox::new(50, 95, 40, 16); // mid_y = 103, 3 px off line 0
    let lines = assign_lines_auto(&[stray, near], &baselines, &params);
    assert_eq!(lines, vec![None, Some(0)]);
}

#[test]
fn no_baselines_means_no_assignments() {
    let baselines = Baselines {
        left: vec![],
        right: vec![],
        mid: vec![],
        full: vec![],
        x_left: 0.0,
        x_right: 100.0,
        x_mid: 50.0,
    };
    let boxes = [BBox::new(10, 10, 5, 5)];
    let lines = assign_lines_auto(&boxes, &baselines, &SegParams::default());
    assert_eq!(lines, vec![None]);
}

#[test]
fn manual_assigns_iff_exactly_one_distinct_label() {
    let boxes = [
        BBox::new(0, 0, 20, 20),    // one label: 3
        BBox::new(40, 0, 20, 50),   // two labels: 3 and 4
        BBox::new(80, 0, 20, 20),   // no labels
        BBox::new(120, 0, 20, 20),  // label 4 twice, still one distinct
    ];
    let points = [
        LabeledPoint { x: 10.0, y: 10.0, label: 3 },
        LabeledPoint { x: 50.0, y: 10.0, label: 3 },
        LabeledPoint { x: 50.0, y: 45.0, label: 4 },
        LabeledPoint { x: 125.0, y: 5.0, label: 4 },
        LabeledPoint { x: 135.0, y: 15.0, label: 4 },
    ];

    let rows = assign_lines_manual(&boxes, &points, &LeaveUnassigned);
    let lines: Vec<Option<usize>> = rows.iter().map(|&(_, l)| l).collect();
    assert_eq!(lines, vec![Some(3), None, None, Some(4)]);
    // The default policy keeps ambiguous boxes whole.
    assert_eq!(rows[1].0, boxes[1]);
}
