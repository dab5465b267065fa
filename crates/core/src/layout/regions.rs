//! Connected-region extraction from a binarized heatmap.
//!
//! Regions are 8-connected foreground components; each contributes one
//! axis-aligned bounding box. Boxes taller than the typical inter-baseline
//! spacing are split into stacked sub-boxes so that two vertically touching
//! lines do not melt into one detection.

use image::{GrayImage, Luma};
use imageproc::region_labelling::{Connectivity, connected_components};
use rustc_hash::FxHashMap;

use super::params::SegParams;
use crate::utils::{BBox, percentile};

/// Extracts bounding boxes of connected foreground regions.
///
/// `full_peaks` are the page's full-width row peaks; the 80th percentile of
/// their spacing bounds the height a single-line region may have. A heatmap
/// with no foreground above the threshold yields an empty list.
pub fn extract_regions(heatmap: &GrayImage, full_peaks: &[f64], params: &SegParams) -> Vec<BBox> {
    let binary = binarize(heatmap, params.binarize_threshold);
    let boxes = component_boxes(&binary);

    let spacings: Vec<f64> = full_peaks.windows(2).map(|w| w[1] - w[0]).collect();
    let Some(max_line_height) = percentile(&spacings, params.split_percentile) else {
        // Fewer than two detected lines: no spacing statistic, no splitting.
        return boxes;
    };
    if max_line_height <= 0.0 {
        return boxes;
    }

    let mut out = Vec::with_capacity(boxes.len());
    for bbox in boxes {
        if (bbox.h as f64) <= max_line_height {
            out.push(bbox);
        } else {
            split_tall_box(bbox, max_line_height, &mut out);
        }
    }
    out
}

/// Foreground = strictly above the threshold.
pub fn binarize(heatmap: &GrayImage, threshold: u8) -> GrayImage {
    GrayImage::from_fn(heatmap.width(), heatmap.height(), |x, y| {
        if heatmap.get_pixel(x, y).0[0] > threshold {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    })
}

/// Bounding box per 8-connected component, in first-encounter (row-major
/// scan) order.
fn component_boxes(binary: &GrayImage) -> Vec<BBox> {
    if binary.width() == 0 || binary.height() == 0 {
        return Vec::new();
    }
    let labels = connected_components(binary, Connectivity::Eight, Luma([0u8]));

    let mut slots: FxHashMap<u32, usize> = FxHashMap::default();
    let mut extents: Vec<(u32, u32, u32, u32)> = Vec::new();
    for (x, y, label) in labels.enumerate_pixels() {
        let label = label.0[0];
        if label == 0 {
            continue;
        }
        match slots.get(&label) {
            Some(&slot) => {
                let e = &mut extents[slot];
                e.0 = e.0.min(x);
                e.1 = e.1.min(y);
                e.2 = e.2.max(x);
                e.3 = e.3.max(y);
            }
            None => {
                slots.insert(label, extents.len());
                extents.push((x, y, x, y));
            }
        }
    }

    extents
        .into_iter()
        .map(|(x0, y0, x1, y1)| BBox::new(x0, y0, x1 - x0 + 1, y1 - y0 + 1))
        .collect()
}

/// Splits a tall box into `ceil(h / max_line_height)` stacked sub-boxes of
/// near-equal height; the remainder goes to the last sub-box. The sub-boxes
/// tile the original exactly.
fn split_tall_box(bbox: BBox, max_line_height: f64, out: &mut Vec<BBox>) {
    let n = ((bbox.h as f64 / max_line_height).ceil() as u32).clamp(1, bbox.h);
    let equal = bbox.h / n;
    let remainder = bbox.h - equal * n;
    for i in 0..n {
        let h = if i == n - 1 { equal + remainder } else { equal };
        out.push(BBox::new(bbox.x, bbox.y + i * equal, bbox.w, h));
    }
}
