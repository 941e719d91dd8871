//! Segment Planner: turns one route result plus pickup/drop-off obligations
//! into an ordered list of typed activity segments.
//!
//! The planner only chooses the coarse shape (fueling stops on short trips,
//! 11-hour driving chunks on long trips); HOS refinement is the scheduler's job.

use crate::defaults::{
    FUELING_STOP_HOURS, FUELING_STOP_SLAB_MILES, LONG_TRIP_THRESHOLD_HOURS, MAX_DRIVING_HOURS,
    PICKUP_DROPOFF_HOURS, TOUR_RESET_HOURS,
};
use crate::types::{PlannedSegment, Route, SegmentType};

const PICKUP_LOCATION: &str = "Pickup";
const DROPOFF_LOCATION: &str = "Drop-off";
const EN_ROUTE_LOCATION: &str = "En Route";
const FUELING_STOP_LOCATION: &str = "Fueling Stop";
const REST_BREAK_LOCATION: &str = "Rest Break";

/// Build the ordered segment list for a single route.
pub fn plan(route: &Route) -> Vec<PlannedSegment> {
    let mut segments = Vec::new();
    segments.push(PlannedSegment::new(SegmentType::OnDuty, PICKUP_DROPOFF_HOURS, PICKUP_LOCATION));

    if route.duration_hours <= LONG_TRIP_THRESHOLD_HOURS {
        segments.extend(plan_short_trip(route));
    } else {
        segments.extend(plan_long_trip(route));
    }

    segments.push(PlannedSegment::new(SegmentType::OnDuty, PICKUP_DROPOFF_HOURS, DROPOFF_LOCATION));
    segments
}

/// Walk the route in 1,000-mile slabs, each a proportional-duration `drive`
/// segment, separated by 0.5-hour fueling stops (none after the last slab).
fn plan_short_trip(route: &Route) -> Vec<PlannedSegment> {
    let total_miles = route.distance_miles;
    let total_hours = route.duration_hours;

    if total_miles <= 0.0 || total_hours <= 0.0 {
        return Vec::new();
    }

    let num_slabs = (total_miles / FUELING_STOP_SLAB_MILES).ceil().max(1.0) as usize;
    let mut out = Vec::with_capacity(num_slabs * 2);
    let mut remaining_miles = total_miles;

    for i in 0..num_slabs {
        let slab_miles = remaining_miles.min(FUELING_STOP_SLAB_MILES);
        remaining_miles -= slab_miles;

        let slab_hours = slab_miles / total_miles * total_hours;
        out.push(PlannedSegment::new(SegmentType::Drive, slab_hours, EN_ROUTE_LOCATION));

        if i + 1 < num_slabs {
            out.push(PlannedSegment::new(SegmentType::OnDuty, FUELING_STOP_HOURS, FUELING_STOP_LOCATION));
        }
    }

    out
}

/// Emit alternating `drive` (≤ 11 h, proportional miles) and 10-hour
/// `off_duty` rest breaks until the route duration is exhausted. No trailing
/// break after the final drive chunk.
fn plan_long_trip(route: &Route) -> Vec<PlannedSegment> {
    let total_miles = route.distance_miles;
    let total_hours = route.duration_hours;

    if total_miles <= 0.0 || total_hours <= 0.0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut remaining_hours = total_hours;

    while remaining_hours > crate::defaults::EPSILON {
        let chunk_hours = remaining_hours.min(MAX_DRIVING_HOURS);
        let chunk_miles = chunk_hours / total_hours * total_miles;
        out.push(PlannedSegment::new(SegmentType::Drive, chunk_hours, EN_ROUTE_LOCATION));
        remaining_hours -= chunk_hours;

        // chunk_miles is computed for documentation parity with the duration
        // split; the scheduler only consumes duration, not miles, per segment.
        let _ = chunk_miles;

        if remaining_hours > crate::defaults::EPSILON {
            out.push(PlannedSegment::new(SegmentType::OffDuty, TOUR_RESET_HOURS, REST_BREAK_LOCATION));
        }
    }

    out
}
