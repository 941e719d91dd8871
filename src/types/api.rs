//! HTTP request/response envelopes for `POST /plan-trip/`

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::coordinate::Coordinate;
use super::duty::DailyLog;
use super::route::Route;

#[derive(Debug, Clone, Deserialize)]
pub struct PlanTripRequest {
    pub current_location: [f64; 2],
    pub pickup: [f64; 2],
    pub dropoff: [f64; 2],
    #[serde(default)]
    pub driver_id: Option<Uuid>,
    #[serde(default)]
    pub current_cycle_used_hours: Option<f64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
}

impl PlanTripRequest {
    pub fn current_coord(&self) -> Coordinate {
        self.current_location.into()
    }
    pub fn pickup_coord(&self) -> Coordinate {
        self.pickup.into()
    }
    pub fn dropoff_coord(&self) -> Coordinate {
        self.dropoff.into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteStatistics {
    pub total_distance: f64,
    pub total_duration: f64,
    pub average_speed: f64,
    pub estimated_fuel_cost: f64,
    pub estimated_tolls: f64,
}

impl RouteStatistics {
    pub fn from_route(route: &Route) -> Self {
        let average_speed = if route.duration_hours > 0.0 {
            route.distance_miles / route.duration_hours
        } else {
            0.0
        };
        Self {
            total_distance: route.distance_miles,
            total_duration: route.duration_hours,
            average_speed,
            estimated_fuel_cost: route.distance_miles * 0.15,
            estimated_tolls: route.distance_miles * 0.05,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub distance: f64,
    pub duration: f64,
    pub geometry: super::coordinate::LineString,
    pub statistics: RouteStatistics,
}

#[derive(Debug, Clone, Serialize)]
pub struct HosCompliance {
    pub is_compliant: bool,
    pub violations: Vec<String>,
    pub warnings: Vec<String>,
}

impl Default for HosCompliance {
    fn default() -> Self {
        Self { is_compliant: true, violations: Vec::new(), warnings: Vec::new() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RestStop {
    pub location: [f64; 2],
    pub distance: f64,
    pub time_from_start: f64,
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteSegmentSlice {
    pub segment_number: usize,
    pub start_distance: f64,
    pub end_distance: f64,
    pub distance: f64,
    pub duration: f64,
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanTripResponse {
    pub route: RouteResponse,
    pub daily_logs: Vec<DailyLog>,
    pub total_distance: f64,
    pub total_duration: f64,
    pub hos_compliance: HosCompliance,
    pub rest_stops: Vec<RestStop>,
    pub route_segments: Vec<RouteSegmentSlice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DriverSummary {
    pub id: Uuid,
    pub name: String,
    pub home_tz: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<super::driver::Driver> for DriverSummary {
    fn from(d: super::driver::Driver) -> Self {
        Self { id: d.id, name: d.name, home_tz: d.home_tz, created_at: d.created_at, updated_at: d.updated_at }
    }
}
