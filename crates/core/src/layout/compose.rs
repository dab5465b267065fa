//! Per-line image composition.
//!
//! All boxes assigned to a line are cropped (with padding) from the page
//! raster and pasted onto one background-matched canvas, preserving their
//! horizontal positions; the canvas is then tight-cropped to the composed
//! content.

use std::collections::BTreeMap;

use image::GrayImage;
use tracing::warn;

use super::params::SegParams;
use crate::utils::{BBox, median_intensity};

/// One composited line raster.
#[derive(Debug, Clone, PartialEq)]
pub struct LineImage {
    /// Line index this raster was composed for.
    pub line: usize,
    pub image: GrayImage,
}

/// Deterministic output file name for the `ordinal`-th line (1-based).
pub fn line_file_name(ordinal: usize) -> String {
    format!("line{:03}.jpg", ordinal)
}

/// Composes one raster per assigned line, ordered by ascending line index.
///
/// `rows` pairs each box with its line assignment; unassigned boxes do not
/// contribute. The page raster must already be at heatmap resolution. A box
/// whose crop falls entirely outside the page raster is logged and skipped;
/// it never aborts the line.
pub fn compose_line_images(
    page: &GrayImage,
    rows: &[(BBox, Option<usize>)],
    params: &SegParams,
) -> Vec<LineImage> {
    let mut by_line: BTreeMap<usize, Vec<BBox>> = BTreeMap::new();
    for &(bbox, line) in rows {
        if let Some(line) = line {
            by_line.entry(line).or_default().push(bbox);
        }
    }

    let background = median_intensity(page);
    by_line
        .into_iter()
        .map(|(line, boxes)| LineImage {
            line,
            image: compose_one(page, &boxes, background, params),
        })
        .collect()
}

fn compose_one(page: &GrayImage, boxes: &[BBox], background: u8, params: &SegParams) -> GrayImage {
    let canvas_w = boxes.iter().map(BBox::right).max().unwrap_or(0) + params.canvas_width_margin;
    let canvas_h = boxes.iter().map(|b| b.h).max().unwrap_or(0) + params.canvas_height_margin;
    let min_y = boxes.iter().map(|b| b.y).min().unwrap_or(0);

    let mut canvas = GrayImage::from_pixel(canvas_w, canvas_h, image::Luma([background]));
    for bbox in boxes {
        paste_padded(&mut canvas, page, bbox, min_y, params);
    }
    tight_crop(&canvas)
}

/// Pastes the padded crop of `bbox` onto the canvas. The glyph keeps its
/// source horizontal position and lands with its top at
/// `(bbox.y - min_y) + pad_vertical`; pixels outside either raster are
/// skipped.
fn paste_padded(canvas: &mut GrayImage, page: &GrayImage, bbox: &BBox, min_y: u32, params: &SegParams) {
    let crop_left = bbox.x.saturating_sub(params.pad_horizontal);
    let crop_right = bbox.right().saturating_add(params.pad_horizontal).min(page.width());
    let crop_top = bbox.y.saturating_sub(params.pad_vertical);
    let crop_bottom = bbox.bottom().saturating_add(params.pad_vertical).min(page.height());
    if crop_left >= crop_right || crop_top >= crop_bottom {
        warn!(
            x = bbox.x,
            y = bbox.y,
            "region box lies outside the page raster, skipping"
        );
        return;
    }

    // The crop may have lost part of its top padding at the raster edge;
    // compensate so the glyph row stays at (y - min_y) + pad.
    let top_pad = bbox.y - crop_top;
    let dest_top = (bbox.y - min_y) + params.pad_vertical - top_pad;
    let dest_left = crop_left;

    for (dy, src_y) in (crop_top..crop_bottom).enumerate() {
        let dest_y = dest_top + dy as u32;
        if dest_y >= canvas.height() {
            break;
        }
        for (dx, src_x) in (crop_left..crop_right).enumerate() {
            let dest_x = dest_left + dx as u32;
            if dest_x >= canvas.width() {
                break;
            }
            canvas.put_pixel(dest_x, dest_y, *page.get_pixel(src_x, src_y));
        }
    }
}

/// Trims uniform background margins from every edge.
///
/// The corner value defines the background; maximal runs of rows/columns
/// consisting entirely of that value are removed from each edge. A second
/// crop of the result is a no-op, and a fully uniform raster is returned
/// unchanged.
pub fn tight_crop(img: &GrayImage) -> GrayImage {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return img.clone();
    }
    let background = img.get_pixel(0, 0).0[0];

    let row_uniform = |y: u32| (0..w).all(|x| img.get_pixel(x, y).0[0] == background);
    let col_uniform = |x: u32| (0..h).all(|y| img.get_pixel(x, y).0[0] == background);

    let mut top = 0;
    while top < h && row_uniform(top) {
        top += 1;
    }
    if top == h {
        return img.clone();
    }
    let mut bottom = h;
    while bottom > top && row_uniform(bottom - 1) {
        bottom -= 1;
    }
    let mut left = 0;
    while left < w && col_uniform(left) {
        left += 1;
    }
    let mut right = w;
    while right > left && col_uniform(right - 1) {
        right -= 1;
    }

    image::imageops::crop_imm(img, left, top, right - left, bottom - top).to_image()
}
