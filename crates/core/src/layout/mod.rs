//! Layout analysis module for manuscript line segmentation.
//!
//! This module contains:
//! - Segmentation parameters (SegParams)
//! - Heatmap profiles and peak detection
//! - Baseline detection and reconciliation
//! - Connected-region extraction
//! - Automatic and manual line assignment
//! - Per-line image composition
//! - The annotated review overlay

pub mod assign;
pub mod baselines;
pub mod compose;
pub mod overlay;
pub mod params;
pub mod profile;
pub mod regions;

pub use assign::{AmbiguityPolicy, LeaveUnassigned, assign_lines_auto, assign_lines_manual};
pub use baselines::{Baselines, detect_baselines};
pub use compose::{LineImage, compose_line_images, line_file_name, tight_crop};
pub use overlay::render_overlay;
pub use params::SegParams;
pub use regions::extract_regions;
