//! Realized duty-status entries and daily logs (RODS)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status of a realized [`DutyEntry`]. Distinct from [`super::segment::SegmentType`]
/// because the wire vocabulary differs (`driving` vs `drive`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    Driving,
    OnDuty,
    OffDuty,
}

/// One interval inside a daily log, fully contained within a single local
/// calendar day. `end_time` uses the sentinel `"24:00"` for end-of-day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyEntry {
    pub start_time: String,
    pub end_time: String,
    pub status: DutyStatus,
    pub location: String,
    pub duration_hours: f64,
}

/// Driving / on-duty / off-duty totals for one [`DailyLog`], in hours.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DutyTotals {
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
}

/// One 24-hour page of a driver's Record of Duty Status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    pub entries: Vec<DutyEntry>,
    pub totals: DutyTotals,
}

impl DailyLog {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, entries: Vec::new(), totals: DutyTotals::default() }
    }
}
