//! Tests for connected-region extraction and the tall-box split rule.

use image::GrayImage;
use scriptorium_core::SegParams;
use scriptorium_core::layout::extract_regions;

fn blob(img: &mut GrayImage, x0: u32, y0: u32, w: u32, h: u32, value: u8) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            img.put_pixel(x, y, image::Luma([value]));
        }
    }
}

#[test]
fn empty_heatmap_yields_empty_list() {
    let heatmap = GrayImage::new(64, 64);
    let boxes = extract_regions(&heatmap, &[10.0, 30.0], &SegParams::default());
    assert!(boxes.is_empty());
}

#[test]
fn sub_threshold_foreground_is_ignored() {
    let mut heatmap = GrayImage::new(64, 64);
    blob(&mut heatmap, 10, 10, 8, 8, 100); // exactly at threshold, not above
    let boxes = extract_regions(&heatmap, &[], &SegParams::default());
    assert!(boxes.is_empty());
}

#[test]
fn separate_blobs_get_separate_boxes() {
    let mut heatmap = GrayImage::new(128, 64);
    blob(&mut heatmap, 10, 10, 12, 6, 200);
    blob(&mut heatmap, 60, 30, 20, 8, 200);
    let mut boxes = extract_regions(&heatmap, &[], &SegParams::default());
    boxes.sort_by_key(|b| b.x);

    assert_eq!(boxes.len(), 2);
    assert_eq!((boxes[0].x, boxes[0].y, boxes[0].w, boxes[0].h), (10, 10, 12, 6));
    assert_eq!((boxes[1].x, boxes[1].y, boxes[1].w, boxes[1].h), (60, 30, 20, 8));
}

#[test]
fn tall_region_splits_into_tiling_sub_boxes() {
    let mut heatmap = GrayImage::new(64, 256);
    // One region spanning several line heights.
    blob(&mut heatmap, 8, 20, 16, 100, 200);
    // Baselines spaced 30 rows apart: the 80th-percentile spacing is 30.
    let peaks: Vec<f64> = (0..6).map(|i| 20.0 + 30.0 * i as f64).collect();

    let boxes = extract_regions(&heatmap, &peaks, &SegParams::default());
    assert_eq!(boxes.len(), 4); // ceil(100 / 30)

    // Sub-boxes tile the original without gaps or overlaps.
    let total: u32 = boxes.iter().map(|b| b.h).sum();
    assert_eq!(total, 100);
    for pair in boxes.windows(2) {
        assert_eq!(pair[0].bottom(), pair[1].y);
    }
    assert_eq!(boxes[0].y, 20);
    assert_eq!(boxes.last().unwrap().bottom(), 120);
    // Remainder is absorbed by the last sub-box.
    assert_eq!(boxes[0].h, 25);
    assert_eq!(boxes.last().unwrap().h, 25);
    assert!(boxes.iter().all(|b| b.x == 8 && b.w == 16));
}

#[test]
fn short_region_is_not_split() {
    let mut heatmap = GrayImage::new(64, 256);
    blob(&mut heatmap, 8, 20, 16, 25, 200);
    let peaks: Vec<f64> = (0..6).map(|i| 20.0 + 30.0 * i as f64).collect();
    let boxes = extract_regions(&heatmap, &peaks, &SegParams::default());
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].h, 25);
}
