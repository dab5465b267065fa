//! Baseline detection and reconciliation.
//!
//! Candidate baselines are row-profile peaks computed independently along
//! three reference column bands (left edge, right edge, mid-page) so that a
//! skewed or curved page still yields one usable estimate per line at every
//! horizontal position. The three sequences are reconciled to a common
//! length before use. This is a heuristic tolerance for skew/curvature: for
//! small `len()` the three sequences are not guaranteed to originate from
//! the same physical lines.

use image::GrayImage;

use super::params::SegParams;
use super::profile::{band_row_profile, column_profile, find_peaks, row_profile};
use crate::utils::argmin;

/// Reconciled baseline estimates for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Baselines {
    /// Baseline rows seen from the left reference band.
    pub left: Vec<f64>,
    /// Baseline rows seen from the right reference band.
    pub right: Vec<f64>,
    /// Baseline rows seen from the mid-page reference band.
    pub mid: Vec<f64>,
    /// Un-reconciled full-width row peaks; drives the tall-region split
    /// rule, which wants the page-global line spacing.
    pub full: Vec<f64>,
    /// X-coordinate of the left reference column.
    pub x_left: f64,
    /// X-coordinate of the right reference column.
    pub x_right: f64,
    /// X-coordinate of the mid reference column.
    pub x_mid: f64,
}

impl Baselines {
    /// Common length of the three reconciled sequences.
    pub fn len(&self) -> usize {
        self.mid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mid.is_empty()
    }
}

/// Detects and reconciles baselines from a heatmap.
pub fn detect_baselines(heatmap: &GrayImage, params: &SegParams) -> Baselines {
    let height = heatmap.height();
    let width = heatmap.width();
    let min_distance = height as f64 * params.peak_distance_frac;

    let peaks_of = |profile: &[f64]| -> Vec<f64> {
        let max = profile.iter().cloned().fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return Vec::new();
        }
        find_peaks(
            profile,
            params.peak_height_frac * max,
            min_distance,
            params.peak_min_width,
        )
        .into_iter()
        .map(|i| i as f64)
        .collect()
    };

    let full = peaks_of(&row_profile(heatmap));

    // Locate the page's ink extent from column-profile peaks; without any,
    // fall back to the raster edges so assignment can still proceed.
    let cols = column_profile(heatmap);
    let col_max = cols.iter().cloned().fold(0.0_f64, f64::max);
    let col_peaks = if col_max > 0.0 {
        find_peaks(&cols, params.peak_height_frac * col_max, 0.0, 0.0)
    } else {
        Vec::new()
    };
    let x_left = col_peaks.first().copied().unwrap_or(0) as u32;
    let x_right = col_peaks
        .last()
        .copied()
        .unwrap_or(width.saturating_sub(1) as usize) as u32;
    let x_mid = (x_left + x_right) / 2;

    let band = params.band_width;
    let mut left = peaks_of(&band_row_profile(heatmap, x_left, x_left + band));
    let right = peaks_of(&band_row_profile(heatmap, x_right.saturating_sub(band), x_right));
    let mid = peaks_of(&band_row_profile(
        heatmap,
        x_mid.saturating_sub(band / 2),
        x_mid + band / 2,
    ));

    // A left-band peak well above the first full-width peak is marginalia or
    // smudge, not a line start; drop it before reconciling.
    if let (Some(&first_full), Some(&first_left)) = (full.first(), left.first()) {
        if first_full - first_left > height as f64 / params.first_peak_drop_divisor {
            left.remove(0);
        }
    }

    let (left, right, mid) = reconcile(left, right, mid);

    Baselines {
        left,
        right,
        mid,
        full,
        x_left: x_left as f64,
        x_right: x_right as f64,
        x_mid: x_mid as f64,
    }
}

/// Reconciles the three peak sequences to a common length `L`.
///
/// The shortest sequence sets `L`; each longer sequence contributes the
/// contiguous window of length `L` whose first element lies closest to the
/// reference's first element. Already-equal lengths pass through unchanged.
/// A mismatch of more than one peak means the bands disagree about the page
/// and the closest-window heuristic cannot be trusted; in that case all
/// three collapse to the mid sequence.
pub fn reconcile(
    left: Vec<f64>,
    right: Vec<f64>,
    mid: Vec<f64>,
) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let l = left.len().min(right.len()).min(mid.len());
    let longest = left.len().max(right.len()).max(mid.len());
    if longest - l > 1 {
        return (mid.clone(), mid.clone(), mid);
    }

    // First of left/right/mid at the minimal length anchors the windows.
    let reference = if left.len() == l {
        left.clone()
    } else if right.len() == l {
        right.clone()
    } else {
        mid.clone()
    };
    let anchor = reference.first().copied().unwrap_or(0.0);

    let align = |seq: Vec<f64>| -> Vec<f64> {
        if seq.len() <= l {
            return seq;
        }
        let k = seq.len() - l;
        let end = (k + 1).min(seq.len());
        let offsets: Vec<f64> = seq[..end].iter().map(|&v| (v - anchor).abs()).collect();
        let start = argmin(&offsets).unwrap_or(0);
        seq[start..start + l].to_vec()
    };

    (align(left), align(right), align(mid))
}
