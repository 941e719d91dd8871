//! Geographic coordinate and route geometry types

use serde::{Deserialize, Serialize};

/// A `(longitude, latitude)` pair in decimal degrees.
///
/// Wire format is `[lon, lat]` (GeoJSON order), not `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(value: [f64; 2]) -> Self {
        Self { lon: value[0], lat: value[1] }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        [value.lon, value.lat]
    }
}

impl Serialize for LineString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let points: Vec<[f64; 2]> = self.points.iter().map(|c| (*c).into()).collect();
        points.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LineString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points: Vec<[f64; 2]> = Vec::deserialize(deserializer)?;
        Ok(LineString { points: points.into_iter().map(Coordinate::from).collect() })
    }
}

/// An ordered sequence of coordinates forming a route polyline.
#[derive(Debug, Clone, Default)]
pub struct LineString {
    pub points: Vec<Coordinate>,
}

impl LineString {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Interpolate a point at a fractional position `t` (0.0..=1.0) along the
    /// polyline by coordinate-index proportion (not arc-length).
    pub fn point_at_fraction(&self, t: f64) -> Option<Coordinate> {
        if self.points.is_empty() {
            return None;
        }
        let last_idx = self.points.len() - 1;
        let idx = ((t.clamp(0.0, 1.0)) * last_idx as f64).round() as usize;
        self.points.get(idx.min(last_idx)).copied()
    }

    /// Evenly partition the polyline into `n` slices (each a contiguous
    /// sub-sequence of coordinates), used for `route_segments` in the API response.
    pub fn partition(&self, n: usize) -> Vec<Vec<Coordinate>> {
        if n == 0 || self.points.is_empty() {
            return Vec::new();
        }
        let total = self.points.len();
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let start = total * i / n;
            let end = (total * (i + 1) / n).max(start + 1).min(total);
            out.push(self.points[start..end].to_vec());
        }
        out
    }
}
