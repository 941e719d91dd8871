//! Route Client: uniform interface over external directions providers with a
//! deterministic haversine fallback.
//!
//! Preference order is Mapbox → OpenRouteService → estimator. Each provider
//! attempt that errors (HTTP failure, non-2xx, timeout, malformed body, empty
//! result) falls through to the next. The estimator never fails, so
//! `RouteClient::get_route` never returns `Err`.

mod estimator;
mod mapbox;
mod ors;

pub use estimator::HaversineEstimator;
pub use mapbox::MapboxProvider;
pub use ors::OrsProvider;

use async_trait::async_trait;
use tracing::warn;

use crate::config::Config;
use crate::types::{Coordinate, Route};

/// A single directions provider. Implementors should bail on any failure
/// mode described in the Route Client contract rather than returning a
/// degraded `Route`.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    async fn get_route(
        &self,
        current: Coordinate,
        pickup: Coordinate,
        dropoff: Coordinate,
    ) -> anyhow::Result<Route>;

    fn name(&self) -> &str;
}

/// Ordered chain of providers, falling through on error. The last provider is
/// always the infallible estimator.
pub struct RouteClient {
    providers: Vec<Box<dyn RouteProvider>>,
}

impl RouteClient {
    pub fn new(providers: Vec<Box<dyn RouteProvider>>) -> Self {
        Self { providers }
    }

    /// Build the client from configuration: Mapbox and ORS are included only
    /// when their tokens are configured; the estimator is always appended last.
    pub fn from_config(config: &Config) -> Self {
        let mut providers: Vec<Box<dyn RouteProvider>> = Vec::new();

        if let Some(token) = &config.mapbox_access_token {
            providers.push(Box::new(MapboxProvider::new(token.clone())));
        }
        if let Some(key) = &config.ors_api_key {
            providers.push(Box::new(OrsProvider::new(key.clone())));
        }
        providers.push(Box::new(HaversineEstimator::new()));

        Self::new(providers)
    }

    /// Try each provider in order, falling through on error. The estimator at
    /// the end of the chain guarantees this always resolves to `Ok`.
    pub async fn get_route(
        &self,
        current: Coordinate,
        pickup: Coordinate,
        dropoff: Coordinate,
    ) -> anyhow::Result<Route> {
        for provider in &self.providers {
            match provider.get_route(current, pickup, dropoff).await {
                Ok(route) => return Ok(route),
                Err(e) => {
                    warn!(provider = provider.name(), error = %e, "route provider failed, falling through");
                }
            }
        }
        anyhow::bail!("no route provider produced a result");
    }
}
