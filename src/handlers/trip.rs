//! `POST /plan-trip/`

use axum::extract::State;
use axum::Json;

use crate::errors::AppResult;
use crate::services::trip_planner;
use crate::types::{PlanTripRequest, PlanTripResponse};

use super::AppState;

pub async fn plan_trip(
    State(state): State<AppState>,
    Json(request): Json<PlanTripRequest>,
) -> AppResult<Json<PlanTripResponse>> {
    let response = trip_planner::plan_trip(&state.pool, &state.route_client, &state.config, &request).await?;
    Ok(Json(response))
}
