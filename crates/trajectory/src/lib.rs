//! # Trajectory
//!
//! 预计算机器人轨迹的按时间采样。
//!
//! 负责：
//! - 差速 / 舵轮运动学采样点
//! - 相邻采样点之间的线性插值
//! - 二分查找 + 边界钳制
//! - 按场地对称性翻转到对方联盟
//!
//! ## 使用示例
//!
//! ```ignore
//! use trajectory::{FieldSymmetry, Season, SwerveTrajectory};
//!
//! let trajectory = SwerveTrajectory::new("amp_to_source", samples, vec![0], events);
//! let red = FieldSymmetry::for_season(Season::Y2024);
//!
//! // Every control-loop tick
//! if let Some(sample) = trajectory.sample_at(elapsed, Some(&red)) {
//!     drive(sample.pose(), sample.chassis_speeds());
//! }
//! ```

mod error;
mod event;
mod sample;
mod search;
mod trajectory;

pub use error::TrajectoryError;
pub use event::EventMarker;
pub use sample::{DifferentialSample, SwerveModule, SwerveSample, TrajectorySample, MODULE_COUNT};
pub use search::{Lookup, COINCIDENT_EPSILON};
pub use trajectory::{DifferentialTrajectory, SwerveTrajectory, Trajectory};

// Re-export contracts types
pub use contracts::{
    ChassisSpeeds, FieldFlipper, FieldSymmetry, LookupOutcome, Pose2d, Season, Symmetry,
};
