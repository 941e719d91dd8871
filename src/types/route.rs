//! Route type produced by the Route Client

use serde::{Deserialize, Serialize};

use super::coordinate::LineString;

/// A route between waypoints as returned by the Route Client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub distance_miles: f64,
    pub duration_hours: f64,
    pub geometry: LineString,
}

impl Route {
    pub fn new(distance_miles: f64, duration_hours: f64, geometry: LineString) -> Self {
        Self {
            distance_miles: round2(distance_miles),
            duration_hours: round2(duration_hours),
            geometry,
        }
    }
}

/// Round to two decimal places, matching the Route Client's fixed output precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub const METERS_TO_MILES: f64 = 0.000621371;
pub const SECONDS_TO_HOURS: f64 = 1.0 / 3600.0;
