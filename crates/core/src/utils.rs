//! Miscellaneous routines shared across the segmentation pipeline.
//!
//! Provides:
//! - Geometric types (Point, BBox)
//! - Order statistics (percentile, histogram median)
//! - Small numeric helpers (argmin over float slices)

use image::GrayImage;

/// A 2D point (x, y) in page coordinates.
pub type Point = (f64, f64);

/// Axis-aligned bounding box in heatmap pixel coordinates.
///
/// Invariant: `w > 0 && h > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BBox {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl BBox {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge.
    pub const fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Vertical midpoint of the box.
    pub fn mid_y(&self) -> f64 {
        self.y as f64 + self.h as f64 / 2.0
    }

    /// Inclusive containment test, matching annotation semantics where a
    /// point on the border belongs to the box.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x as f64 && x <= self.right() as f64 && y >= self.y as f64 && y <= self.bottom() as f64
    }
}

/// Linearly interpolated percentile of a sample, `q` in 0..=100.
///
/// Matches numpy's default interpolation; an empty sample yields None.
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Median intensity of a grayscale raster via a 256-bin histogram.
///
/// Returns 0 for an empty raster.
pub fn median_intensity(img: &GrayImage) -> u8 {
    let total = (img.width() as u64) * (img.height() as u64);
    if total == 0 {
        return 0;
    }
    let mut histogram = [0u64; 256];
    for pixel in img.pixels() {
        histogram[pixel.0[0] as usize] += 1;
    }
    let midpoint = total.div_ceil(2);
    let mut seen = 0u64;
    for (value, &count) in histogram.iter().enumerate() {
        seen += count;
        if seen >= midpoint {
            return value as u8;
        }
    }
    255
}

/// Index of the minimum value; first index wins ties. None on empty input.
pub fn argmin(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, bv)) if v >= bv => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
