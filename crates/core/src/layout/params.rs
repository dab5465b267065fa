//! Segmentation parameters.
//!
//! Contains SegParams struct for controlling layout analysis and line
//! segmentation behavior.

/// Parameters for layout analysis and line segmentation.
///
/// Controls heatmap binarization, baseline peak detection, line assignment
/// and the neighbor review graph. Defaults carry the values tuned on the
/// manuscript corpus; they can be overridden per manuscript.
#[derive(Debug, Clone, PartialEq)]
pub struct SegParams {
    /// Heatmap binarization threshold on a 0-255 scale. Pixels strictly
    /// above this value count as foreground.
    pub binarize_threshold: u8,

    /// Row-profile peaks must reach this fraction of the profile maximum to
    /// count as a baseline candidate.
    pub peak_height_frac: f64,

    /// Minimum peak width, in profile samples, measured at half prominence.
    pub peak_min_width: f64,

    /// Minimum inter-peak distance as a fraction of the heatmap height.
    pub peak_distance_frac: f64,

    /// Width in pixels of the left/right reference column bands.
    pub band_width: u32,

    /// The first left-band peak is dropped as spurious when it sits farther
    /// than `height / first_peak_drop_divisor` above the first full-width
    /// row peak.
    pub first_peak_drop_divisor: f64,

    /// Percentile of inter-baseline spacing above which a region box is
    /// split into stacked sub-boxes.
    pub split_percentile: f64,

    /// A box whose blended-baseline distance exceeds this many pixels is
    /// left unassigned rather than forced onto a line.
    pub max_baseline_distance: f64,

    /// Vertical padding around a glyph crop during line composition.
    pub pad_vertical: u32,

    /// Horizontal padding around a glyph crop during line composition.
    pub pad_horizontal: u32,

    /// Extra canvas width beyond the rightmost box edge.
    pub canvas_width_margin: u32,

    /// Extra canvas height beyond the tallest box.
    pub canvas_height_margin: u32,

    /// Neighbor count for the review graph's k-nearest-neighbor query.
    pub neighbor_k: usize,

    /// Cosine-similarity ceiling for an opposed neighbor pair. Pairs below
    /// this value point in near-opposite directions from the query point.
    pub opposition_threshold: f64,

    /// DBSCAN radius over standardized edge features.
    pub cluster_eps: f64,

    /// DBSCAN minimum neighborhood size for a core point.
    pub cluster_min_pts: usize,
}

impl Default for SegParams {
    fn default() -> Self {
        Self {
            binarize_threshold: 100,
            peak_height_frac: 0.5,
            peak_min_width: 5.0,
            peak_distance_frac: 0.01,
            band_width: 100,
            first_peak_drop_divisor: 12.0,
            split_percentile: 80.0,
            max_baseline_distance: 20.0,
            pad_vertical: 5,
            pad_horizontal: 10,
            canvas_width_margin: 500,
            canvas_height_margin: 250,
            neighbor_k: 8,
            opposition_threshold: -0.8,
            cluster_eps: 0.5,
            cluster_min_pts: 4,
        }
    }
}
