//! `GET /drivers/` and `GET /drivers/{id}/logs/`

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::db::queries::{daily_rods, drivers};
use crate::errors::AppResult;
use crate::types::{DriverSummary, PersistedDailyRod};

use super::AppState;

pub async fn list_drivers(State(state): State<AppState>) -> AppResult<Json<Vec<DriverSummary>>> {
    let drivers = drivers::list(&state.pool).await?;
    Ok(Json(drivers.into_iter().map(DriverSummary::from).collect()))
}

pub async fn driver_logs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<PersistedDailyRod>>> {
    let logs = daily_rods::list_for_driver(&state.pool, id).await?;
    Ok(Json(logs))
}
