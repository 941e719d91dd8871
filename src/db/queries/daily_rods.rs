//! Persisted daily RODS page database queries

use chrono::NaiveDate;
use sqlx::{PgPool, Result};
use uuid::Uuid;

use crate::types::{DailyRodRow, DutyEntry, DutyTotals, PersistedDailyRod};

/// Create or update the `(driver_id, date)` page
pub async fn upsert(
    pool: &PgPool,
    driver_id: Uuid,
    date: NaiveDate,
    entries: &[DutyEntry],
    totals: DutyTotals,
) -> Result<PersistedDailyRod> {
    let entries_json = serde_json::to_value(entries).expect("DutyEntry always serializes to JSON");

    let row = sqlx::query_as::<_, DailyRodRow>(
        r#"
        INSERT INTO daily_rods (
            driver_id, date, entries, driving_hours, on_duty_hours, off_duty_hours,
            created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
        ON CONFLICT (driver_id, date)
        DO UPDATE SET
            entries = $3,
            driving_hours = $4,
            on_duty_hours = $5,
            off_duty_hours = $6,
            updated_at = NOW()
        RETURNING
            driver_id, date, entries, driving_hours, on_duty_hours, off_duty_hours,
            created_at, updated_at
        "#,
    )
    .bind(driver_id)
    .bind(date)
    .bind(entries_json)
    .bind(totals.driving_hours)
    .bind(totals.on_duty_hours)
    .bind(totals.off_duty_hours)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// All persisted pages for one driver, newest date first — backs the logs endpoint
pub async fn list_for_driver(pool: &PgPool, driver_id: Uuid) -> Result<Vec<PersistedDailyRod>> {
    let rows = sqlx::query_as::<_, DailyRodRow>(
        r#"
        SELECT driver_id, date, entries, driving_hours, on_duty_hours, off_duty_hours,
               created_at, updated_at
        FROM daily_rods
        WHERE driver_id = $1
        ORDER BY date DESC
        "#,
    )
    .bind(driver_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(PersistedDailyRod::from).collect())
}

/// Pages for one driver with `date` in `[start, end]` inclusive — backs Weekly History
pub async fn range_since(
    pool: &PgPool,
    driver_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<PersistedDailyRod>> {
    let rows = sqlx::query_as::<_, DailyRodRow>(
        r#"
        SELECT driver_id, date, entries, driving_hours, on_duty_hours, off_duty_hours,
               created_at, updated_at
        FROM daily_rods
        WHERE driver_id = $1 AND date >= $2 AND date <= $3
        ORDER BY date ASC
        "#,
    )
    .bind(driver_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(PersistedDailyRod::from).collect())
}
