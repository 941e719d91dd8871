//! Driver database queries

use sqlx::{PgPool, Result};
use uuid::Uuid;

use crate::types::Driver;

/// Create a new driver
pub async fn create(pool: &PgPool, name: &str, home_tz: &str) -> Result<Driver> {
    let driver = sqlx::query_as::<_, Driver>(
        r#"
        INSERT INTO drivers (id, name, home_tz)
        VALUES (gen_random_uuid(), $1, $2)
        RETURNING id, name, home_tz, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(home_tz)
    .fetch_one(pool)
    .await?;

    Ok(driver)
}

/// Fetch a single driver by id
pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Driver>> {
    let driver = sqlx::query_as::<_, Driver>(
        "SELECT id, name, home_tz, created_at, updated_at FROM drivers WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(driver)
}

/// List all drivers, newest first
pub async fn list(pool: &PgPool) -> Result<Vec<Driver>> {
    let drivers = sqlx::query_as::<_, Driver>(
        "SELECT id, name, home_tz, created_at, updated_at FROM drivers ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(drivers)
}
