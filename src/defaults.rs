//! Regulatory constants for property-carrying drivers (non-adverse conditions)

/// Driving limit within a duty tour, in hours.
pub const MAX_DRIVING_HOURS: f64 = 11.0;

/// On-duty window limit within a duty tour, in hours.
pub const MAX_ON_DUTY_WINDOW_HOURS: f64 = 14.0;

/// Cumulative driving since the last qualifying break before a 30-minute
/// off-duty break is required, in hours.
pub const MAX_CONSECUTIVE_DRIVING_HOURS: f64 = 8.0;

/// Length of the mandatory break required after [`MAX_CONSECUTIVE_DRIVING_HOURS`].
pub const SHORT_BREAK_HOURS: f64 = 0.5;

/// Off-duty period that resets the 11- and 14-hour counters and starts a new duty tour.
pub const TOUR_RESET_HOURS: f64 = 10.0;

/// Rolling 8-day on-duty limit, in hours.
pub const WEEKLY_ON_DUTY_LIMIT_HOURS: f64 = 70.0;

/// Off-duty restart that clears the rolling 8-day counter.
pub const WEEKLY_RESTART_HOURS: f64 = 34.0;

/// Floating-point comparison tolerance used throughout the scheduler.
pub const EPSILON: f64 = 1e-6;

/// Mileage slab size for fueling stops on short trips.
pub const FUELING_STOP_SLAB_MILES: f64 = 1000.0;

/// Fueling stop duration, in hours.
pub const FUELING_STOP_HOURS: f64 = 0.5;

/// Mandatory on-duty time booked for pickup and drop-off, in hours.
pub const PICKUP_DROPOFF_HOURS: f64 = 1.0;

/// Route duration threshold distinguishing "short" from "long" trips, in hours.
pub const LONG_TRIP_THRESHOLD_HOURS: f64 = 11.0;

/// Estimator fallback average speed, in mph.
pub const ESTIMATOR_AVERAGE_SPEED_MPH: f64 = 50.0;

/// Mean earth radius used for haversine distance, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;
