//! Planned activity segments produced by the Segment Planner

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentType {
    Drive,
    OnDuty,
    OffDuty,
}

/// One intended activity interval fed into the HOS scheduler.
///
/// `duration_hours` must be > 0 for well-formed input; the scheduler skips
/// exactly-zero-duration segments and rejects negative/non-finite ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedSegment {
    #[serde(rename = "type")]
    pub kind: SegmentType,
    pub duration_hours: f64,
    pub location: String,
}

impl PlannedSegment {
    pub fn new(kind: SegmentType, duration_hours: f64, location: impl Into<String>) -> Self {
        Self { kind, duration_hours, location: location.into() }
    }

    pub fn is_well_formed(&self) -> bool {
        self.duration_hours.is_finite() && self.duration_hours >= 0.0
    }
}
