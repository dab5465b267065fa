//! Error types for the scriptorium segmentation library.

use thiserror::Error;

/// Primary error type for segmentation operations.
#[derive(Error, Debug)]
pub enum SegError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("annotation count mismatch: {points} points vs {labels} labels")]
    AnnotationMismatch { points: usize, labels: usize },

    #[error("malformed point on line {line}: {text:?}")]
    MalformedPoint { line: usize, text: String },

    #[error("malformed label on line {line}: {text:?}")]
    MalformedLabel { line: usize, text: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for SegError.
pub type Result<T> = std::result::Result<T, SegError>;
