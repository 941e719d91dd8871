//! Trip Planner: orchestrates routing, segmentation, and scheduling into one
//! HTTP response, persisting RODS pages when a driver is attached.

use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use sqlx::PgPool;

use crate::config::Config;
use crate::db::queries::{daily_rods, drivers};
use crate::errors::{AppError, AppResult};
use crate::services::routing::RouteClient;
use crate::services::{hos_scheduler, segment_planner, weekly_history};
use crate::types::{
    HosCompliance, PlanTripRequest, PlanTripResponse, Route, RouteResponse, RouteSegmentSlice,
    RouteStatistics, RestStop,
};

const REST_STOP_INTERVAL_HOURS: f64 = 8.0;
const HOURS_PER_SEGMENT_SLICE: f64 = 11.0;

/// Validate input, run the full route → segments → schedule pipeline, and
/// persist one RODS page per DailyLog when a driver is attached.
pub async fn plan_trip(
    pool: &PgPool,
    route_client: &RouteClient,
    config: &Config,
    request: &PlanTripRequest,
) -> AppResult<PlanTripResponse> {
    validate_coordinates(request)?;

    let driver = match request.driver_id {
        Some(id) => Some(drivers::get(pool, id).await?.ok_or(AppError::UnknownDriver)?),
        None => None,
    };

    let tz = resolve_timezone(driver.as_ref(), config);
    let start = resolve_start_instant(request, tz);

    let weekly_used = match request.current_cycle_used_hours {
        Some(hours) => hours,
        None => match &driver {
            Some(d) => weekly_history::weekly_on_duty(pool, d.id, start.with_timezone(&tz).date_naive())
                .await
                .map_err(|e| AppError::Internal(e.to_string()))?,
            None => 0.0,
        },
    };

    let route = route_client
        .get_route(request.current_coord(), request.pickup_coord(), request.dropoff_coord())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let segments = segment_planner::plan(&route);
    let daily_logs = hos_scheduler::schedule(start, tz, &segments, weekly_used)?;

    if let Some(d) = &driver {
        for log in &daily_logs {
            daily_rods::upsert(pool, d.id, log.date, &log.entries, log.totals).await?;
        }
    }

    Ok(assemble_response(&route, daily_logs))
}

fn validate_coordinates(request: &PlanTripRequest) -> AppResult<()> {
    for (label, coord) in [
        ("current_location", request.current_coord()),
        ("pickup", request.pickup_coord()),
        ("dropoff", request.dropoff_coord()),
    ] {
        if !coord.is_valid() {
            return Err(AppError::InvalidInput(format!("{} is out of range", label)));
        }
    }
    Ok(())
}

fn resolve_timezone(driver: Option<&crate::types::Driver>, config: &Config) -> Tz {
    let tz_name = driver.map(|d| d.home_tz.as_str()).unwrap_or(&config.default_driver_tz);
    Tz::from_str(tz_name).unwrap_or(chrono_tz::UTC)
}

fn resolve_start_instant(request: &PlanTripRequest, tz: Tz) -> DateTime<Utc> {
    match (request.start_date, request.start_time) {
        (Some(date), Some(time)) => {
            let naive = date.and_time(time);
            match tz.from_local_datetime(&naive) {
                chrono::LocalResult::Single(dt) => dt.with_timezone(&Utc),
                chrono::LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
                chrono::LocalResult::None => Utc::now(),
            }
        }
        (Some(date), None) => {
            let naive = date.and_hms_opt(0, 0, 0).expect("00:00:00 is always valid");
            match tz.from_local_datetime(&naive) {
                chrono::LocalResult::Single(dt) => dt.with_timezone(&Utc),
                chrono::LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
                chrono::LocalResult::None => Utc::now(),
            }
        }
        _ => Utc::now(),
    }
}

fn assemble_response(route: &Route, daily_logs: Vec<crate::types::DailyLog>) -> PlanTripResponse {
    let total_distance = route.distance_miles;
    let total_duration = route.duration_hours;

    let route_response = RouteResponse {
        distance: route.distance_miles,
        duration: route.duration_hours,
        geometry: route.geometry.clone(),
        statistics: RouteStatistics::from_route(route),
    };

    let rest_stops = build_rest_stops(route);
    let route_segments = build_route_segments(route);

    PlanTripResponse {
        route: route_response,
        daily_logs,
        total_distance,
        total_duration,
        hos_compliance: HosCompliance::default(),
        rest_stops,
        route_segments,
    }
}

/// Place a rest stop every [`REST_STOP_INTERVAL_HOURS`] along the route,
/// interpolated by coordinate-index proportion.
fn build_rest_stops(route: &Route) -> Vec<RestStop> {
    if route.duration_hours <= 0.0 {
        return Vec::new();
    }

    let mut stops = Vec::new();
    let mut elapsed = REST_STOP_INTERVAL_HOURS;
    while elapsed < route.duration_hours {
        let fraction = elapsed / route.duration_hours;
        if let Some(coord) = route.geometry.point_at_fraction(fraction) {
            let distance = fraction * route.distance_miles;
            stops.push(RestStop {
                location: coord.into(),
                distance,
                time_from_start: elapsed,
                amenities: vec!["fuel".to_string(), "parking".to_string()],
            });
        }
        elapsed += REST_STOP_INTERVAL_HOURS;
    }
    stops
}

/// Evenly partition the route geometry into `⌈duration/11⌉` slices.
fn build_route_segments(route: &Route) -> Vec<RouteSegmentSlice> {
    if route.duration_hours <= 0.0 {
        return Vec::new();
    }

    let num_slices = (route.duration_hours / HOURS_PER_SEGMENT_SLICE).ceil().max(1.0) as usize;
    let slices = route.geometry.partition(num_slices);
    let per_slice_distance = route.distance_miles / num_slices as f64;
    let per_slice_duration = route.duration_hours / num_slices as f64;

    slices
        .into_iter()
        .enumerate()
        .map(|(i, points)| RouteSegmentSlice {
            segment_number: i + 1,
            start_distance: per_slice_distance * i as f64,
            end_distance: per_slice_distance * (i as f64 + 1.0),
            distance: per_slice_distance,
            duration: per_slice_duration,
            coordinates: points.into_iter().map(|c| c.into()).collect(),
        })
        .collect()
}
