//! Weekly History: rolling 8-day on-duty total for a driver.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::queries::daily_rods;

/// Sum of `on_duty_hours` across persisted daily RODS pages with
/// `date` in `[as_of_date - 8 days, as_of_date]`.
pub async fn weekly_on_duty(pool: &PgPool, driver_id: Uuid, as_of_date: NaiveDate) -> Result<f64> {
    let start = as_of_date - Duration::days(8);
    let rows = daily_rods::range_since(pool, driver_id, start, as_of_date).await?;
    Ok(rows.iter().map(|r| r.totals.on_duty_hours).sum())
}
