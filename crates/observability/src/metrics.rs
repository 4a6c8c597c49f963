//! 轨迹采样指标
//!
//! 通过全局 `metrics` recorder 记录；未安装 recorder 时所有调用均为 no-op。
//!
//! 指标：
//! - `trajectory_sample_lookups_total{outcome}`：按查询结果分类的采样次数
//! - `trajectory_flips_total`：整条轨迹翻转次数
//! - `trajectory_flip_samples`：每次翻转的采样点数

use contracts::LookupOutcome;
use metrics::{counter, describe_counter, describe_histogram, histogram};

const LOOKUPS_TOTAL: &str = "trajectory_sample_lookups_total";
const FLIPS_TOTAL: &str = "trajectory_flips_total";
const FLIP_SAMPLES: &str = "trajectory_flip_samples";

/// 向已安装的 recorder 注册指标说明
pub fn describe_metrics() {
    describe_counter!(LOOKUPS_TOTAL, "Trajectory sample lookups by outcome");
    describe_counter!(FLIPS_TOTAL, "Whole-trajectory flips");
    describe_histogram!(FLIP_SAMPLES, "Samples per flipped trajectory");
}

/// 记录一次时间戳查询
///
/// 每次 `Trajectory::locate` 成功定位时调用。
///
/// # Example
///
/// ```ignore
/// use observability::metrics::record_lookup;
///
/// record_lookup(LookupOutcome::ClampedEnd);
/// ```
#[inline]
pub fn record_lookup(outcome: LookupOutcome) {
    counter!(LOOKUPS_TOTAL, "outcome" => outcome.as_str()).increment(1);
}

/// 记录一次整条轨迹翻转
#[inline]
pub fn record_flip(samples: usize) {
    counter!(FLIPS_TOTAL).increment(1);
    histogram!(FLIP_SAMPLES).record(samples as f64);
}
