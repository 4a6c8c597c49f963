//! Swerve-drive sample with per-module forces.

use contracts::{ChassisSpeeds, FieldFlipper, Pose2d, Symmetry};
use serde::{Deserialize, Serialize};

use super::{interpolation_scale, lerp, TrajectorySample};

/// Number of swerve modules a sample carries forces for
pub const MODULE_COUNT: usize = 4;

/// Swerve module position, in the order used by `fx` / `fy`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwerveModule {
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl SwerveModule {
    pub const ALL: [SwerveModule; MODULE_COUNT] = [
        Self::FrontLeft,
        Self::FrontRight,
        Self::BackLeft,
        Self::BackRight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Module occupying this one's place after a left/right mirror
    #[inline]
    pub fn mirrored(self) -> Self {
        match self {
            Self::FrontLeft => Self::FrontRight,
            Self::FrontRight => Self::FrontLeft,
            Self::BackLeft => Self::BackRight,
            Self::BackRight => Self::BackLeft,
        }
    }
}

/// State of a four-module swerve drivetrain
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SwerveSample {
    /// Seconds since trajectory start
    pub timestamp: f64,
    /// Field X (m)
    pub x: f64,
    /// Field Y (m)
    pub y: f64,
    /// Heading (rad), 0 along +X, not wrapped
    pub heading: f64,
    /// Field-relative X velocity (m/s)
    pub vx: f64,
    /// Field-relative Y velocity (m/s)
    pub vy: f64,
    /// Angular velocity (rad/s)
    pub omega: f64,
    /// X acceleration (m/s²)
    pub ax: f64,
    /// Y acceleration (m/s²)
    pub ay: f64,
    /// Angular acceleration (rad/s²)
    pub alpha: f64,
    /// Per-module X force (N), indexed by [`SwerveModule`]
    pub fx: [f64; MODULE_COUNT],
    /// Per-module Y force (N), indexed by [`SwerveModule`]
    pub fy: [f64; MODULE_COUNT],
}

impl SwerveSample {
    /// `(fx, fy)` acting on one module
    #[inline]
    pub fn module_force(&self, module: SwerveModule) -> (f64, f64) {
        (self.fx[module.index()], self.fy[module.index()])
    }
}

impl TrajectorySample for SwerveSample {
    #[inline]
    fn timestamp(&self) -> f64 {
        self.timestamp
    }

    #[inline]
    fn pose(&self) -> Pose2d {
        Pose2d::new(self.x, self.y, self.heading)
    }

    #[inline]
    fn chassis_speeds(&self) -> ChassisSpeeds {
        ChassisSpeeds::new(self.vx, self.vy, self.omega)
    }

    fn interpolate(&self, end: &Self, t: f64) -> Self {
        let scale = interpolation_scale(self.timestamp, end.timestamp, t);
        Self {
            timestamp: t,
            x: lerp(self.x, end.x, scale),
            y: lerp(self.y, end.y, scale),
            heading: lerp(self.heading, end.heading, scale),
            vx: lerp(self.vx, end.vx, scale),
            vy: lerp(self.vy, end.vy, scale),
            omega: lerp(self.omega, end.omega, scale),
            ax: lerp(self.ax, end.ax, scale),
            ay: lerp(self.ay, end.ay, scale),
            alpha: lerp(self.alpha, end.alpha, scale),
            fx: std::array::from_fn(|i| lerp(self.fx[i], end.fx[i], scale)),
            fy: std::array::from_fn(|i| lerp(self.fy[i], end.fy[i], scale)),
        }
    }

    fn flipped<F: FieldFlipper + ?Sized>(&self, flipper: &F) -> Self {
        let x = flipper.flip_x(self.x);
        let y = flipper.flip_y(self.y);
        let heading = flipper.flip_heading(self.heading);
        match flipper.symmetry() {
            // X components reverse, left and right modules trade places.
            Symmetry::Mirrored => Self {
                timestamp: self.timestamp,
                x,
                y,
                heading,
                vx: -self.vx,
                vy: self.vy,
                omega: -self.omega,
                ax: -self.ax,
                ay: self.ay,
                alpha: -self.alpha,
                fx: SwerveModule::ALL.map(|m| -self.fx[m.mirrored().index()]),
                fy: SwerveModule::ALL.map(|m| self.fy[m.mirrored().index()]),
            },
            // Linear terms reverse; rotation sense is preserved.
            Symmetry::Rotated => Self {
                timestamp: self.timestamp,
                x,
                y,
                heading,
                vx: -self.vx,
                vy: -self.vy,
                omega: self.omega,
                ax: -self.ax,
                ay: -self.ay,
                alpha: self.alpha,
                fx: self.fx.map(|f| -f),
                fy: self.fy.map(|f| -f),
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
