//! Geographic calculations

use crate::defaults::EARTH_RADIUS_MILES;
use crate::types::Coordinate;

/// Great-circle distance between two points in miles.
pub fn haversine_distance_miles(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_MILES * c
}
