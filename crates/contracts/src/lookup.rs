//! LookupOutcome - how a timestamp query was answered.
//!
//! Shared between the trajectory search and the metrics layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which branch of the trajectory search produced a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupOutcome {
    /// Trajectory has exactly one sample
    Single,
    /// Query before the first sample
    ClampedStart,
    /// Query at or after the last sample
    ClampedEnd,
    /// Neighbours closer than the coincidence tolerance; returned the later one
    Coincident,
    /// Interpolated between two neighbours
    Interpolated,
}

impl LookupOutcome {
    pub const ALL: [LookupOutcome; 5] = [
        Self::Single,
        Self::ClampedStart,
        Self::ClampedEnd,
        Self::Coincident,
        Self::Interpolated,
    ];

    /// Stable label for metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::ClampedStart => "clamped_start",
            Self::ClampedEnd => "clamped_end",
            Self::Coincident => "coincident",
            Self::Interpolated => "interpolated",
        }
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
