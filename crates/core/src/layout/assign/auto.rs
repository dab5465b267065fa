//! Automatic line assignment from reconciled baselines.

use super::super::baselines::Baselines;
use super::super::params::SegParams;
use crate::utils::{BBox, argmin};

/// Assigns each box to the nearest blended baseline.
///
/// The baseline estimate at the box's horizontal position interpolates
/// between the mid sequence and whichever edge sequence is on the box's
/// side, with inverse-distance weights; the far edge carries no weight.
/// A box farther than `params.max_baseline_distance` from every blended
/// baseline is noise and stays unassigned. Deterministic: ties resolve to
/// the lowest baseline index.
pub fn assign_lines_auto(
    boxes: &[BBox],
    baselines: &Baselines,
    params: &SegParams,
) -> Vec<Option<usize>> {
    if baselines.is_empty() {
        return vec![None; boxes.len()];
    }

    boxes
        .iter()
        .map(|bbox| assign_one(bbox, baselines, params.max_baseline_distance))
        .collect()
}

fn assign_one(bbox: &BBox, baselines: &Baselines, max_distance: f64) -> Option<usize> {
    let x = bbox.x as f64;
    let mid_y = bbox.mid_y();

    let (edge_seq, d_edge) = if x <= baselines.x_mid {
        (&baselines.left, (x - baselines.x_left).abs())
    } else {
        (&baselines.right, (x - baselines.x_right).abs())
    };
    let d_mid = (x - baselines.x_mid).abs();

    let denom = d_edge + d_mid;
    let blended: Vec<f64> = if denom == 0.0 {
        baselines.mid.clone()
    } else {
        edge_seq
            .iter()
            .zip(&baselines.mid)
            .map(|(&edge, &mid)| (d_mid * edge + d_edge * mid) / denom)
            .collect()
    };

    let distances: Vec<f64> = blended.iter().map(|&b| (b - mid_y).abs()).collect();
    let best = argmin(&distances)?;
    if distances[best] > max_distance {
        return None;
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baselines() -> Baselines {
        Baselines {
            left: vec![100.0, 200.0],
            right: vec![110.0, 210.0],
            mid: vec![105.0, 205.0],
            full: vec![105.0, 205.0],
            x_left: 0.0,
            x_right: 1000.0,
            x_mid: 500.0,
        }
    }

    #[test]
    fn box_at_left_edge_uses_left_sequence() {
        let b = BBox::new(0, 95, 40, 10); // mid_y = 100
        assert_eq!(assign_one(&b, &baselines(), 20.0), Some(0));
    }

    #[test]
    fn distant_box_is_unassigned() {
        let b = BBox::new(0, 140, 40, 10); // mid_y = 145, 45 px off line 0
        assert_eq!(assign_one(&b, &baselines(), 20.0), None);
    }

    #[test]
    fn assignment_is_total() {
        let boxes = vec![BBox::new(0, 95, 40, 10), BBox::new(700, 400, 10, 10)];
        let lines = assign_lines_auto(&boxes, &baselines(), &SegParams::default());
        assert_eq!(lines.len(), boxes.len());
        assert_eq!(lines[0], Some(0));
        assert_eq!(lines[1], None);
    }
}
