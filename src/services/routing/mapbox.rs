//! Mapbox Directions v5 client
//!
//! API documentation: https://docs.mapbox.com/api/navigation/directions/

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::RouteProvider;
use crate::types::{route::METERS_TO_MILES, route::SECONDS_TO_HOURS, Coordinate, LineString, Route};

const DEFAULT_BASE_URL: &str = "https://api.mapbox.com/directions/v5/mapbox/driving";
const TIMEOUT_SECONDS: u64 = 30;

pub struct MapboxProvider {
    client: Client,
    base_url: String,
    access_token: String,
}

impl MapboxProvider {
    pub fn new(access_token: String) -> Self {
        Self::with_base_url(access_token, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(access_token: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(TIMEOUT_SECONDS))
            .build()
            .expect("failed to build Mapbox HTTP client");

        Self { client, base_url, access_token }
    }

    fn build_url(&self, current: Coordinate, pickup: Coordinate, dropoff: Coordinate) -> String {
        format!(
            "{}/{},{};{},{};{},{}?access_token={}&geometries=geojson&overview=full&steps=false",
            self.base_url,
            current.lon, current.lat,
            pickup.lon, pickup.lat,
            dropoff.lon, dropoff.lat,
            self.access_token,
        )
    }
}

#[async_trait]
impl RouteProvider for MapboxProvider {
    async fn get_route(
        &self,
        current: Coordinate,
        pickup: Coordinate,
        dropoff: Coordinate,
    ) -> anyhow::Result<Route> {
        let url = self.build_url(current, pickup, dropoff);

        debug!("requesting route from Mapbox");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Mapbox returned error {}: {}", status, body);
        }

        let parsed: MapboxResponse = response.json().await?;

        let route = parsed
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("Mapbox returned no routes"))?;

        if route.geometry.coordinates.is_empty() {
            anyhow::bail!("Mapbox route geometry is empty");
        }

        let geometry = LineString::new(
            route.geometry.coordinates.into_iter().map(Coordinate::from).collect(),
        );

        Ok(Route::new(
            route.distance * METERS_TO_MILES,
            route.duration * SECONDS_TO_HOURS,
            geometry,
        ))
    }

    fn name(&self) -> &str {
        "mapbox"
    }
}

#[derive(Debug, Deserialize)]
struct MapboxResponse {
    routes: Vec<MapboxRoute>,
}

#[derive(Debug, Deserialize)]
struct MapboxRoute {
    distance: f64,
    duration: f64,
    geometry: MapboxGeometry,
}

#[derive(Debug, Deserialize)]
struct MapboxGeometry {
    coordinates: Vec<[f64; 2]>,
}
