//! Named points in time along a trajectory.

use serde::{Deserialize, Serialize};

/// A named event at a timestamp (seconds from trajectory start)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMarker {
    pub timestamp: f64,
    pub name: String,
}

impl EventMarker {
    pub fn new(timestamp: f64, name: impl Into<String>) -> Self {
        Self {
            timestamp,
            name: name.into(),
        }
    }

    /// Same marker, shifted in time by `delta` seconds
    #[inline]
    pub fn offset_by(&self, delta: f64) -> Self {
        Self {
            timestamp: self.timestamp + delta,
            name: self.name.clone(),
        }
    }

    /// Recover a marker from loosely-typed loader fields.
    ///
    /// Events are attached to a waypoint (`target_timestamp`) with a signed
    /// `offset`. Records missing either value, with an empty name, or whose
    /// resolved time is negative or non-finite are dropped.
    pub fn resolve(
        target_timestamp: Option<f64>,
        offset: Option<f64>,
        name: Option<&str>,
    ) -> Option<Self> {
        let timestamp = target_timestamp? + offset?;
        let name = name.filter(|n| !n.is_empty())?;
        if !timestamp.is_finite() || timestamp < 0.0 {
            tracing::debug!(
                marker = name,
                timestamp,
                "dropping event marker with invalid timestamp"
            );
            return None;
        }
        Some(Self::new(timestamp, name))
    }
}
