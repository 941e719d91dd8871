//! Driver and persisted RODS records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::duty::DutyTotals;

/// A driver, durable across trips.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub home_tz: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One persisted `(driver_id, date)` RODS page.
///
/// `entries` is stored as JSON; `sqlx`'s `FromRow` cannot derive a `Vec<DutyEntry>`
/// column directly so the query layer deserializes it from `serde_json::Value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedDailyRod {
    pub driver_id: Uuid,
    pub date: NaiveDate,
    pub entries: serde_json::Value,
    pub totals: DutyTotals,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub(crate) struct DailyRodRow {
    pub driver_id: Uuid,
    pub date: NaiveDate,
    pub entries: serde_json::Value,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DailyRodRow> for PersistedDailyRod {
    fn from(row: DailyRodRow) -> Self {
        Self {
            driver_id: row.driver_id,
            date: row.date,
            entries: row.entries,
            totals: DutyTotals {
                driving_hours: row.driving_hours,
                on_duty_hours: row.on_duty_hours,
                off_duty_hours: row.off_duty_hours,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
