//! Public API surface.

pub mod high_level;

pub use high_level::{segment_page, segment_page_manual, segment_page_manual_with_policy};
