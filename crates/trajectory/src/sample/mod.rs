//! Kinematic samples - one robot state at one timestamp.

mod differential;
mod swerve;

pub use differential::DifferentialSample;
pub use swerve::{SwerveModule, SwerveSample, MODULE_COUNT};

use contracts::{ChassisSpeeds, FieldFlipper, Pose2d};

/// A time-stamped kinematic state that a [`crate::Trajectory`] can search,
/// interpolate and flip.
///
/// Implementations are plain values: every operation returns a new sample.
pub trait TrajectorySample: Clone + Send + Sync {
    /// Seconds since the start of the trajectory
    fn timestamp(&self) -> f64;

    fn pose(&self) -> Pose2d;

    /// Field-relative chassis velocity
    fn chassis_speeds(&self) -> ChassisSpeeds;

    /// Linear interpolation towards `end` at time `t`.
    ///
    /// `end` must be later than `self`. The result's timestamp is exactly
    /// `t`; times outside `[self, end]` extrapolate.
    fn interpolate(&self, end: &Self, t: f64) -> Self;

    /// This state as seen from the other alliance side.
    fn flipped<F: FieldFlipper + ?Sized>(&self, flipper: &F) -> Self;

    /// Same state, shifted in time by `delta` seconds
    fn offset_by(&self, delta: f64) -> Self;
}

#[inline]
pub(crate) fn lerp(a: f64, b: f64, scale: f64) -> f64 {
    a + (b - a) * scale
}

#[inline]
pub(crate) fn interpolation_scale(start: f64, end: f64, t: f64) -> f64 {
    debug_assert!(
        end > start,
        "interpolation requires increasing timestamps: {start} then {end}"
    );
    (t - start) / (end - start)
}
