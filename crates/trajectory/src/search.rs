//! 按时间戳在有序采样序列中查找。
//!
//! 前置条件：采样按时间戳升序排列，否则结果未定义。
//!
//! 查找顺序：
//! - 空序列 → None
//! - 单个采样 → 该采样
//! - 早于首个 / 不早于末个 → 钳制到两端
//! - 下界二分；相邻间隔 < 1e-6 s 视为同一时刻，取后者
//! - 其余 → 在前后两点之间插值

use contracts::LookupOutcome;

use crate::TrajectorySample;

/// 相邻采样间隔小于该值（秒）时视为同一时刻
pub const COINCIDENT_EPSILON: f64 = 1e-6;

/// 查询时间戳在采样序列中的落点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Answer is `samples[index]` unchanged
    Exact {
        index: usize,
        outcome: LookupOutcome,
    },
    /// Answer is interpolated between `samples[behind]` and `samples[behind + 1]`
    Between { behind: usize },
}

impl Lookup {
    #[inline]
    pub fn outcome(&self) -> LookupOutcome {
        match self {
            Self::Exact { outcome, .. } => *outcome,
            Self::Between { .. } => LookupOutcome::Interpolated,
        }
    }

    #[inline]
    fn exact(index: usize, outcome: LookupOutcome) -> Self {
        Self::Exact { index, outcome }
    }
}

/// 定位 `timestamp`，仅在序列为空时返回 `None`
pub(crate) fn locate<S: TrajectorySample>(samples: &[S], timestamp: f64) -> Option<Lookup> {
    let (first, last) = match samples {
        [] => return None,
        [_] => return Some(Lookup::exact(0, LookupOutcome::Single)),
        [first, .., last] => (first, last),
    };

    if timestamp < first.timestamp() {
        return Some(Lookup::exact(0, LookupOutcome::ClampedStart));
    }
    if timestamp >= last.timestamp() {
        return Some(Lookup::exact(samples.len() - 1, LookupOutcome::ClampedEnd));
    }

    // 下界：第一个不早于查询时间的采样
    let low = samples.partition_point(|s| s.timestamp() < timestamp);
    if low == 0 {
        return Some(Lookup::exact(0, LookupOutcome::ClampedStart));
    }

    let behind = &samples[low - 1];
    let ahead = &samples[low];
    if ahead.timestamp() - behind.timestamp() < COINCIDENT_EPSILON {
        return Some(Lookup::exact(low, LookupOutcome::Coincident));
    }

    Some(Lookup::Between { behind: low - 1 })
}

/// 根据查找结果生成采样
#[inline]
pub(crate) fn resolve<S: TrajectorySample>(samples: &[S], lookup: Lookup, timestamp: f64) -> S {
    match lookup {
        Lookup::Exact { index, .. } => samples[index].clone(),
        Lookup::Between { behind } => samples[behind].interpolate(&samples[behind + 1], timestamp),
    }
}
