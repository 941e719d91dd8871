//! OpenRouteService v2 `driving-car` client
//!
//! API documentation: https://openrouteservice.org/dev/#/api-docs/v2/directions/{profile}/geojson

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::RouteProvider;
use crate::types::{route::SECONDS_TO_HOURS, Coordinate, LineString, Route};

const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org/v2/directions/driving-car/geojson";
const TIMEOUT_SECONDS: u64 = 30;

pub struct OrsProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OrsProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(TIMEOUT_SECONDS))
            .build()
            .expect("failed to build OpenRouteService HTTP client");

        Self { client, base_url, api_key }
    }
}

#[async_trait]
impl RouteProvider for OrsProvider {
    async fn get_route(
        &self,
        current: Coordinate,
        pickup: Coordinate,
        dropoff: Coordinate,
    ) -> anyhow::Result<Route> {
        let request = OrsRequest {
            coordinates: vec![
                [current.lon, current.lat],
                [pickup.lon, pickup.lat],
                [dropoff.lon, dropoff.lat],
            ],
            format: "geojson".to_string(),
            units: "mi".to_string(),
        };

        debug!("requesting route from OpenRouteService");

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenRouteService returned error {}: {}", status, body);
        }

        let parsed: OrsResponse = response.json().await?;

        let feature = parsed
            .features
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("OpenRouteService returned no features"))?;

        if feature.geometry.coordinates.is_empty() {
            anyhow::bail!("OpenRouteService route geometry is empty");
        }

        let geometry = LineString::new(
            feature.geometry.coordinates.into_iter().map(Coordinate::from).collect(),
        );

        // ORS reports distance in miles (units=mi was requested) and duration in seconds.
        let summary = feature.properties.summary;
        Ok(Route::new(summary.distance, summary.duration * SECONDS_TO_HOURS, geometry))
    }

    fn name(&self) -> &str {
        "ors"
    }
}

#[derive(Debug, Serialize)]
struct OrsRequest {
    coordinates: Vec<[f64; 2]>,
    format: String,
    units: String,
}

#[derive(Debug, Deserialize)]
struct OrsResponse {
    features: Vec<OrsFeature>,
}

#[derive(Debug, Deserialize)]
struct OrsFeature {
    properties: OrsProperties,
    geometry: OrsGeometry,
}

#[derive(Debug, Deserialize)]
struct OrsProperties {
    summary: OrsSummary,
}

#[derive(Debug, Deserialize)]
struct OrsSummary {
    distance: f64,
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct OrsGeometry {
    coordinates: Vec<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn parses_successful_response() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "features": [{
                "properties": { "summary": { "distance": 620.5, "duration": 36000.0 } },
                "geometry": { "coordinates": [[-87.63, 41.88], [-104.99, 39.74], [-118.24, 34.05]] }
            }]
        });
        Mock::given(method("POST"))
            .and(path_regex(".*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let provider = OrsProvider::with_base_url("test-key".to_string(), server.uri());
        let route = provider
            .get_route(
                Coordinate::new(-87.63, 41.88),
                Coordinate::new(-104.99, 39.74),
                Coordinate::new(-118.24, 34.05),
            )
            .await
            .unwrap();

        assert!((route.distance_miles - 620.5).abs() < 0.01);
        assert!((route.duration_hours - 10.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn falls_through_on_non_2xx_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_regex(".*"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let provider = OrsProvider::with_base_url("bad-key".to_string(), server.uri());
        let result = provider
            .get_route(
                Coordinate::new(-87.63, 41.88),
                Coordinate::new(-104.99, 39.74),
                Coordinate::new(-118.24, 34.05),
            )
            .await;

        assert!(result.is_err());
    }
}
