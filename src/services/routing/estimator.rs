//! Deterministic haversine route estimator — the final, infallible fallback.

use async_trait::async_trait;

use super::RouteProvider;
use crate::defaults::ESTIMATOR_AVERAGE_SPEED_MPH;
use crate::services::geo::haversine_distance_miles;
use crate::types::{Coordinate, LineString, Route};

/// Computes great-circle distance for `current→pickup` and `pickup→dropoff`,
/// sums them, and divides by a fixed average speed to derive duration.
/// Always succeeds.
pub struct HaversineEstimator;

impl HaversineEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RouteProvider for HaversineEstimator {
    async fn get_route(
        &self,
        current: Coordinate,
        pickup: Coordinate,
        dropoff: Coordinate,
    ) -> anyhow::Result<Route> {
        let leg1 = haversine_distance_miles(current, pickup);
        let leg2 = haversine_distance_miles(pickup, dropoff);
        let distance_miles = leg1 + leg2;
        let duration_hours = distance_miles / ESTIMATOR_AVERAGE_SPEED_MPH;

        let geometry = LineString::new(vec![current, pickup, dropoff]);

        Ok(Route::new(distance_miles, duration_hours, geometry))
    }

    fn name(&self) -> &str {
        "estimator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn produces_three_point_geometry() {
        let estimator = HaversineEstimator::new();
        let current = Coordinate::new(-87.6298, 41.8781);
        let pickup = Coordinate::new(-104.9903, 39.7392);
        let dropoff = Coordinate::new(-118.2437, 34.0522);

        let route = estimator.get_route(current, pickup, dropoff).await.unwrap();

        assert_eq!(route.geometry.points.len(), 3);
        assert_eq!(route.geometry.points[0], current);
        assert_eq!(route.geometry.points[1], pickup);
        assert_eq!(route.geometry.points[2], dropoff);
    }

    #[tokio::test]
    async fn distance_and_duration_are_positive_and_consistent() {
        let estimator = HaversineEstimator::new();
        let route = estimator
            .get_route(
                Coordinate::new(-87.6298, 41.8781),
                Coordinate::new(-104.9903, 39.7392),
                Coordinate::new(-118.2437, 34.0522),
            )
            .await
            .unwrap();

        assert!(route.distance_miles > 0.0);
        assert!(route.duration_hours > 0.0);
        assert!((route.duration_hours - route.distance_miles / ESTIMATOR_AVERAGE_SPEED_MPH).abs() < 0.01);
    }

    #[tokio::test]
    async fn never_fails() {
        let estimator = HaversineEstimator::new();
        let result = estimator
            .get_route(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.0))
            .await;
        assert!(result.is_ok());
    }
}
