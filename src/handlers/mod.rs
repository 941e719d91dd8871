//! HTTP handlers and router assembly

pub mod drivers;
pub mod trip;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use sqlx::PgPool;

use crate::config::Config;
use crate::services::routing::RouteClient;

/// Shared state handed to every handler via the `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub route_client: Arc<RouteClient>,
    pub config: Arc<Config>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/plan-trip/", post(trip::plan_trip))
        .route("/drivers/", get(drivers::list_drivers))
        .route("/drivers/:id/logs/", get(drivers::driver_logs))
        .with_state(state)
}
