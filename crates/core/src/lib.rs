//! scriptorium - layout analysis and line segmentation for manuscript page images.
//!
//! Turns a page raster plus a text-probability heatmap into an ordered set of
//! per-line cropped images, either automatically (baseline profiling) or from
//! human point/label annotations, and builds a neighbor review graph that
//! flags likely segmentation errors for a human reviewer.

pub mod annot;
pub mod api;
pub mod error;
pub mod graph;
pub mod layout;
pub mod utils;

// Re-export the high-level entry points
pub use api::high_level;

pub use error::{Result, SegError};
pub use layout::SegParams;
