//! High-level segmentation API.
//!
//! Provides the main entry points of the engine:
//! - `segment_page()` - automatic line segmentation from a heatmap
//! - `segment_page_manual()` - segmentation from human point annotations
//! - `build_review_graph()` - the semi-automatic review graph
//!
//! Each call is a pure, synchronous transformation over page-scoped state;
//! callers may run independent invocations in parallel.

use image::GrayImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::annot::LabeledPoint;
use crate::error::{Result, SegError};
use crate::layout::assign::{AmbiguityPolicy, LeaveUnassigned, assign_lines_auto, assign_lines_manual};
use crate::layout::baselines::detect_baselines;
use crate::layout::compose::{LineImage, compose_line_images};
use crate::layout::params::SegParams;
use crate::layout::regions::extract_regions;
use crate::utils::BBox;

pub use crate::graph::build_review_graph;

/// Automatic segmentation: heatmap in, ordered line images out.
///
/// A heatmap with no foreground above the threshold yields an empty list.
pub fn segment_page(
    page: &GrayImage,
    heatmap: &GrayImage,
    params: &SegParams,
) -> Result<Vec<LineImage>> {
    validate(page, heatmap)?;
    let resized;
    let page = if page.dimensions() == heatmap.dimensions() {
        page
    } else {
        resized = resample(page, heatmap);
        &resized
    };

    let baselines = detect_baselines(heatmap, params);
    let boxes = extract_regions(heatmap, &baselines.full, params);
    debug!(
        lines = baselines.len(),
        regions = boxes.len(),
        "automatic segmentation"
    );
    let assignment = assign_lines_auto(&boxes, &baselines, params);
    let rows: Vec<(BBox, Option<usize>)> = boxes.into_iter().zip(assignment).collect();
    Ok(compose_line_images(page, &rows, params))
}

/// Manual segmentation from labeled annotation points, leaving ambiguous
/// boxes unassigned.
pub fn segment_page_manual(
    page: &GrayImage,
    heatmap: &GrayImage,
    annotations: &[LabeledPoint],
    params: &SegParams,
) -> Result<Vec<LineImage>> {
    segment_page_manual_with_policy(page, heatmap, annotations, params, &LeaveUnassigned)
}

/// Manual segmentation with a caller-supplied ambiguity policy.
///
/// The manual path takes regions as detected - a human resolves tall
/// regions through labels (or the policy), so no automatic height split is
/// applied.
pub fn segment_page_manual_with_policy(
    page: &GrayImage,
    heatmap: &GrayImage,
    annotations: &[LabeledPoint],
    params: &SegParams,
    policy: &dyn AmbiguityPolicy,
) -> Result<Vec<LineImage>> {
    validate(page, heatmap)?;
    let resized;
    let page = if page.dimensions() == heatmap.dimensions() {
        page
    } else {
        resized = resample(page, heatmap);
        &resized
    };

    let boxes = extract_regions(heatmap, &[], params);
    let rows = assign_lines_manual(&boxes, annotations, policy);
    debug!(
        regions = boxes.len(),
        assigned = rows.iter().filter(|(_, l)| l.is_some()).count(),
        "manual segmentation"
    );
    Ok(compose_line_images(page, &rows, params))
}

fn validate(page: &GrayImage, heatmap: &GrayImage) -> Result<()> {
    if heatmap.width() == 0 || heatmap.height() == 0 {
        return Err(SegError::InvalidInput("heatmap has zero size".into()));
    }
    if page.width() == 0 || page.height() == 0 {
        return Err(SegError::InvalidInput("page raster has zero size".into()));
    }
    Ok(())
}

/// Bilinear resample of the page raster to heatmap resolution.
fn resample(page: &GrayImage, heatmap: &GrayImage) -> GrayImage {
    imageops::resize(page, heatmap.width(), heatmap.height(), FilterType::Triangle)
}
