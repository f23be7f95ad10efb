//! Error type for the validated constructors and views.

use thiserror::Error;

/// Errors raised when a segmentation map or a raw type tag is inconsistent.
#[derive(Debug, Error)]
pub enum PerceptionError {
    /// `seg` does not hold exactly `width * height` class indices.
    #[error("segmentation buffer holds {got} values, expected {expected}")]
    SegLengthMismatch { expected: usize, got: usize },

    /// `data` does not hold exactly `width * height * channel` scores.
    #[error("score buffer holds {got} values, expected {expected}")]
    ScoreLengthMismatch { expected: usize, got: usize },

    /// `width * height * channel` does not fit in `usize`.
    #[error("grid {width}x{height} with {channel} channels is too large")]
    GridTooLarge { width: u32, height: u32, channel: u32 },

    /// The valid region does not fit inside the grid.
    #[error("valid region {valid_w}x{valid_h} exceeds grid {width}x{height}")]
    ValidRegionOutOfBounds {
        valid_w: u32,
        valid_h: u32,
        width: u32,
        height: u32,
    },

    /// A raw tag that is neither `DET` (1) nor `SEG` (4).
    #[error("unknown perception type tag: {0}")]
    UnknownType(u32),

    #[error("segmentation shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
