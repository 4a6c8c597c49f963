use thiserror::Error;

/// Trajectory construction errors
///
/// Only reported by the validating constructor; [`crate::Trajectory::new`]
/// trusts its input.
#[derive(Debug, Error, PartialEq)]
pub enum TrajectoryError {
    /// Sample timestamps decrease (or are NaN) at `index`
    #[error("samples out of order at index {index}: {previous} then {current}")]
    UnsortedSamples {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// Split index points past the last sample
    #[error("split {split} out of range for {len} samples")]
    SplitOutOfRange { split: usize, len: usize },

    /// Split indices must be strictly increasing
    #[error("splits not strictly increasing at position {index}")]
    UnsortedSplits { index: usize },
}
