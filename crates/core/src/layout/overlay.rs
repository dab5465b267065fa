//! Annotated review overlay.
//!
//! Renders the manual-assignment state onto the page raster so a reviewer
//! can see which regions were claimed by which annotation points before
//! committing to line composition.

use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::annot::LabeledPoint;
use crate::utils::BBox;

const ASSIGNED: Rgb<u8> = Rgb([0, 200, 0]);
const UNASSIGNED: Rgb<u8> = Rgb([220, 160, 0]);
const POINT: Rgb<u8> = Rgb([220, 0, 0]);

/// Renders assignment rows and annotation points over the page raster.
///
/// Assigned boxes are outlined green, unassigned boxes amber, annotation
/// points drawn as filled red dots.
pub fn render_overlay(
    page: &GrayImage,
    rows: &[(BBox, Option<usize>)],
    points: &[LabeledPoint],
) -> RgbImage {
    let mut canvas = RgbImage::from_fn(page.width(), page.height(), |x, y| {
        let v = page.get_pixel(x, y).0[0];
        Rgb([v, v, v])
    });

    for &(bbox, line) in rows {
        let color = if line.is_some() { ASSIGNED } else { UNASSIGNED };
        let rect = Rect::at(bbox.x as i32, bbox.y as i32).of_size(bbox.w, bbox.h);
        draw_hollow_rect_mut(&mut canvas, rect, color);
    }

    for point in points {
        draw_filled_circle_mut(&mut canvas, (point.x as i32, point.y as i32), 4, POINT);
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_keeps_page_dimensions() {
        let page = GrayImage::from_pixel(40, 30, image::Luma([128]));
        let rows = [(BBox::new(5, 5, 10, 8), Some(0))];
        let points = [LabeledPoint { x: 8.0, y: 8.0, label: 0 }];
        let overlay = render_overlay(&page, &rows, &points);
        assert_eq!(overlay.dimensions(), (40, 30));
        // Box outline lands on the canvas.
        assert_eq!(*overlay.get_pixel(5, 5), ASSIGNED);
    }
}
