use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use image::GrayImage;

use scriptorium_core::SegParams;
use scriptorium_core::high_level::segment_page;

/// A page of evenly spaced synthetic text lines with a matching heatmap.
fn synthetic_page(width: u32, height: u32, lines: u32) -> (GrayImage, GrayImage) {
    let spacing = height / (lines + 1);
    let heatmap = GrayImage::from_fn(width, height, |x, y| {
        let on_line = (50..width - 50).contains(&x)
            && (1..=lines).any(|l| y.abs_diff(l * spacing) <= 4);
        image::Luma([if on_line { 220 } else { 0 }])
    });
    let page = GrayImage::from_fn(width, height, |x, y| {
        let v = if heatmap.get_pixel(x, y).0[0] > 0 { 40 } else { 185 };
        image::Luma([v])
    });
    (page, heatmap)
}

fn bench_segment_page(c: &mut Criterion) {
    let (page, heatmap) = synthetic_page(800, 1000, 12);
    let params = SegParams::default();

    c.bench_function("segment_page_800x1000_12_lines", |b| {
        b.iter(|| segment_page(black_box(&page), black_box(&heatmap), &params).unwrap());
    });
}

criterion_group!(benches, bench_segment_page);
criterion_main!(benches);
