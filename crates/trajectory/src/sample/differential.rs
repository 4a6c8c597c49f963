//! Differential-drive (tank) sample.

use contracts::{ChassisSpeeds, FieldFlipper, Pose2d, Symmetry};
use serde::{Deserialize, Serialize};

use super::{interpolation_scale, lerp, TrajectorySample};

/// State of a two-sided drivetrain
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DifferentialSample {
    /// Seconds since trajectory start
    pub timestamp: f64,
    /// Field X (m)
    pub x: f64,
    /// Field Y (m)
    pub y: f64,
    /// Heading (rad), 0 along +X, not wrapped
    pub heading: f64,
    /// Left wheel velocity (m/s)
    pub vl: f64,
    /// Right wheel velocity (m/s)
    pub vr: f64,
    /// Chassis angular velocity (rad/s)
    pub omega: f64,
    /// Left wheel acceleration (m/s²)
    pub al: f64,
    /// Right wheel acceleration (m/s²)
    pub ar: f64,
    /// Left side force (N)
    pub fl: f64,
    /// Right side force (N)
    pub fr: f64,
}

impl TrajectorySample for DifferentialSample {
    #[inline]
    fn timestamp(&self) -> f64 {
        self.timestamp
    }

    #[inline]
    fn pose(&self) -> Pose2d {
        Pose2d::new(self.x, self.y, self.heading)
    }

    /// Forward speed is the mean of both sides; no lateral component.
    #[inline]
    fn chassis_speeds(&self) -> ChassisSpeeds {
        ChassisSpeeds::new((self.vl + self.vr) / 2.0, 0.0, self.omega)
    }

    fn interpolate(&self, end: &Self, t: f64) -> Self {
        let scale = interpolation_scale(self.timestamp, end.timestamp, t);
        Self {
            timestamp: t,
            x: lerp(self.x, end.x, scale),
            y: lerp(self.y, end.y, scale),
            heading: lerp(self.heading, end.heading, scale),
            vl: lerp(self.vl, end.vl, scale),
            vr: lerp(self.vr, end.vr, scale),
            omega: lerp(self.omega, end.omega, scale),
            al: lerp(self.al, end.al, scale),
            ar: lerp(self.ar, end.ar, scale),
            fl: lerp(self.fl, end.fl, scale),
            fr: lerp(self.fr, end.fr, scale),
        }
    }

    fn flipped<F: FieldFlipper + ?Sized>(&self, flipper: &F) -> Self {
        let x = flipper.flip_x(self.x);
        let y = flipper.flip_y(self.y);
        let heading = flipper.flip_heading(self.heading);
        match flipper.symmetry() {
            // Left and right trade places; turning direction reverses.
            Symmetry::Mirrored => Self {
                timestamp: self.timestamp,
                x,
                y,
                heading,
                vl: self.vr,
                vr: self.vl,
                omega: -self.omega,
                al: self.ar,
                ar: self.al,
                fl: self.fr,
                fr: self.fl,
            },
            Symmetry::Rotated => Self {
                x,
                y,
                heading,
                ..*self
            },
        }
    }

    #[inline]
    fn offset_by(&self, delta: f64) -> Self {
        Self {
            timestamp: self.timestamp + delta,
            ..*self
        }
    }
}
