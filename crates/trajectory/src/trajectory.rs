//! Generic trajectory over any [`TrajectorySample`].

use std::cmp::Ordering;
use std::sync::Arc;

use contracts::{FieldFlipper, Pose2d};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::search::{self, Lookup};
use crate::{DifferentialSample, EventMarker, SwerveSample, TrajectoryError, TrajectorySample};

/// Trajectory of a differential drivetrain
pub type DifferentialTrajectory = Trajectory<DifferentialSample>;

/// Trajectory of a swerve drivetrain
pub type SwerveTrajectory = Trajectory<SwerveSample>;

/// Named, time-sorted sequence of samples plus split points and events.
///
/// Immutable once built. Name, splits and events are shared between a
/// trajectory and the copies derived from it by [`Trajectory::flipped`], so
/// cloning or flipping only copies the sample vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory<S> {
    name: Arc<str>,
    samples: Vec<S>,
    splits: Arc<[usize]>,
    events: Arc<[EventMarker]>,
}

impl<S: TrajectorySample> Trajectory<S> {
    /// Build a trajectory from loader output.
    ///
    /// `samples` must be sorted by timestamp; use [`Trajectory::try_new`] to
    /// have that checked.
    pub fn new(
        name: impl Into<Arc<str>>,
        samples: Vec<S>,
        splits: Vec<usize>,
        events: Vec<EventMarker>,
    ) -> Self {
        Self {
            name: name.into(),
            samples,
            splits: splits.into(),
            events: events.into(),
        }
    }

    /// Build and validate a trajectory
    ///
    /// # Errors
    /// - Sample timestamps decreasing or NaN
    /// - Split index past the last sample
    /// - Splits not strictly increasing
    pub fn try_new(
        name: impl Into<Arc<str>>,
        samples: Vec<S>,
        splits: Vec<usize>,
        events: Vec<EventMarker>,
    ) -> Result<Self, TrajectoryError> {
        let trajectory = Self::new(name, samples, splits, events);
        trajectory.validate()?;
        Ok(trajectory)
    }

    /// Check the ordering preconditions the search relies on
    pub fn validate(&self) -> Result<(), TrajectoryError> {
        let result = validate_samples(&self.samples)
            .and_then(|()| validate_splits(&self.splits, self.samples.len()));
        if let Err(ref e) = result {
            tracing::warn!(trajectory = %self.name, error = %e, "invalid trajectory");
        }
        result
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn samples(&self) -> &[S] {
        &self.samples
    }

    #[inline]
    pub fn splits(&self) -> &[usize] {
        &self.splits
    }

    #[inline]
    pub fn events(&self) -> &[EventMarker] {
        &self.events
    }

    /// Events with the given name, in stored order
    pub fn events_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a EventMarker> + 'a {
        self.events.iter().filter(move |e| e.name == name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Find which samples answer a query at `timestamp`.
    ///
    /// `None` only when the trajectory has no samples.
    #[instrument(
        level = "trace",
        name = "trajectory_locate",
        skip(self),
        fields(trajectory = %self.name)
    )]
    pub fn locate(&self, timestamp: f64) -> Option<Lookup> {
        let lookup = search::locate(&self.samples, timestamp)?;
        observability::record_lookup(lookup.outcome());
        Some(lookup)
    }

    /// State at `timestamp`, interpolated between neighbouring samples.
    ///
    /// Queries before the start or after the end clamp to the first or last
    /// sample. With a flipper the result is re-expressed for the other
    /// alliance. `None` only when the trajectory has no samples.
    pub fn sample_at(&self, timestamp: f64, flip: Option<&dyn FieldFlipper>) -> Option<S> {
        let lookup = self.locate(timestamp)?;
        let sample = search::resolve(&self.samples, lookup, timestamp);
        Some(match flip {
            Some(flipper) => sample.flipped(flipper),
            None => sample,
        })
    }

    pub fn initial_pose(&self, flip: Option<&dyn FieldFlipper>) -> Option<Pose2d> {
        self.samples.first().map(|s| pose_of(s, flip))
    }

    pub fn final_pose(&self, flip: Option<&dyn FieldFlipper>) -> Option<Pose2d> {
        self.samples.last().map(|s| pose_of(s, flip))
    }

    /// Timestamp of the last sample, 0 when empty
    #[inline]
    pub fn total_time(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.timestamp())
    }

    /// Unflipped pose of every sample, in order
    pub fn poses(&self) -> Vec<Pose2d> {
        self.samples.iter().map(|s| s.pose()).collect()
    }

    /// This trajectory as driven from the other alliance side
    pub fn flipped<F: FieldFlipper + ?Sized>(&self, flipper: &F) -> Self {
        let samples: Vec<S> = self.samples.iter().map(|s| s.flipped(flipper)).collect();
        tracing::debug!(
            trajectory = %self.name,
            samples = samples.len(),
            symmetry = %flipper.symmetry(),
            "flipped trajectory"
        );
        observability::record_flip(samples.len());
        Self {
            name: Arc::clone(&self.name),
            samples,
            splits: Arc::clone(&self.splits),
            events: Arc::clone(&self.events),
        }
    }

    /// The segment starting at `splits[index]`, re-timed to start at zero.
    ///
    /// The segment runs to the next split (inclusive) or the last sample and
    /// keeps only the events inside its time range. `None` if `index` or the
    /// split it names is out of range.
    pub fn split(&self, index: usize) -> Option<Self> {
        let start = *self.splits.get(index)?;
        let end = match self.splits.get(index + 1) {
            Some(&next) => next.checked_add(1)?,
            None => self.samples.len(),
        };
        let segment = self.samples.get(start..end).filter(|s| !s.is_empty())?;

        let start_time = segment[0].timestamp();
        let end_time = segment[segment.len() - 1].timestamp();
        let samples: Vec<S> = segment.iter().map(|s| s.offset_by(-start_time)).collect();
        let events: Vec<EventMarker> = self
            .events
            .iter()
            .filter(|e| e.timestamp >= start_time && e.timestamp <= end_time)
            .map(|e| e.offset_by(-start_time))
            .collect();

        tracing::debug!(
            trajectory = %self.name,
            split = index,
            samples = samples.len(),
            events = events.len(),
            "extracted split"
        );

        Some(Self::new(
            format!("{}[{}]", self.name, index),
            samples,
            Vec::new(),
            events,
        ))
    }
}

fn pose_of<S: TrajectorySample>(sample: &S, flip: Option<&dyn FieldFlipper>) -> Pose2d {
    match flip {
        Some(flipper) => sample.flipped(flipper).pose(),
        None => sample.pose(),
    }
}

fn validate_samples<S: TrajectorySample>(samples: &[S]) -> Result<(), TrajectoryError> {
    for (index, pair) in samples.windows(2).enumerate() {
        let (previous, current) = (pair[0].timestamp(), pair[1].timestamp());
        // NaN on either side counts as out of order
        if let Some(Ordering::Less) | None = current.partial_cmp(&previous) {
            return Err(TrajectoryError::UnsortedSamples {
                index: index + 1,
                previous,
                current,
            });
        }
    }
    Ok(())
}

fn validate_splits(splits: &[usize], len: usize) -> Result<(), TrajectoryError> {
    for (index, &split) in splits.iter().enumerate() {
        if split >= len {
            return Err(TrajectoryError::SplitOutOfRange { split, len });
        }
        if index > 0 && split <= splits[index - 1] {
            return Err(TrajectoryError::UnsortedSplits { index });
        }
    }
    Ok(())
}
