//! Planar pose and chassis velocity types.

use nalgebra::{Isometry2, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Robot pose on the field: translation (m) plus heading (rad).
///
/// Backed by an [`Isometry2`], so composing or inverting poses goes through
/// nalgebra directly via [`Pose2d::isometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2d(Isometry2<f64>);

impl Pose2d {
    /// Create a pose from field coordinates and a heading in radians.
    #[inline]
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self(Isometry2::new(Vector2::new(x, y), heading))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.translation.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.translation.y
    }

    /// Heading in radians, normalized to (-π, π].
    #[inline]
    pub fn heading(&self) -> f64 {
        self.0.rotation.angle()
    }

    #[inline]
    pub fn isometry(&self) -> &Isometry2<f64> {
        &self.0
    }
}

impl From<Isometry2<f64>> for Pose2d {
    fn from(iso: Isometry2<f64>) -> Self {
        Self(iso)
    }
}

impl From<Pose2d> for Isometry2<f64> {
    fn from(pose: Pose2d) -> Self {
        pose.0
    }
}

/// Field-relative chassis velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChassisSpeeds {
    /// Velocity along field X (m/s)
    pub vx: f64,
    /// Velocity along field Y (m/s)
    pub vy: f64,
    /// Angular velocity (rad/s)
    pub omega: f64,
}

impl ChassisSpeeds {
    #[inline]
    pub fn new(vx: f64, vy: f64, omega: f64) -> Self {
        Self { vx, vy, omega }
    }

    /// Components as `(vx, vy, omega)`.
    #[inline]
    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.vx, self.vy, self.omega)
    }
}
