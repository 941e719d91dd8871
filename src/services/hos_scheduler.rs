//! HOS Scheduler: the core state machine.
//!
//! Consumes an ordered list of [`PlannedSegment`]s plus an absolute start
//! instant and the driver's already-used weekly on-duty hours, and emits a
//! calendar-aligned sequence of [`DailyLog`]s. Durations are tracked
//! internally as integer seconds to avoid floating-point drift across many
//! additions; hours are derived only when rendering a [`DutyEntry`].

use chrono::{DateTime, Duration, LocalResult, TimeZone, Utc};
use chrono_tz::Tz;

use crate::defaults::{
    EPSILON, MAX_CONSECUTIVE_DRIVING_HOURS, MAX_DRIVING_HOURS, MAX_ON_DUTY_WINDOW_HOURS,
    SHORT_BREAK_HOURS, TOUR_RESET_HOURS, WEEKLY_ON_DUTY_LIMIT_HOURS, WEEKLY_RESTART_HOURS,
};
use crate::errors::{AppError, AppResult};
use crate::types::{DailyLog, DutyEntry, DutyStatus, DutyTotals, PlannedSegment, SegmentType};

const SECONDS_PER_HOUR: f64 = 3600.0;

fn to_secs(hours: f64) -> i64 {
    (hours * SECONDS_PER_HOUR).round() as i64
}

const MAX_DRIVING_SECS: i64 = (MAX_DRIVING_HOURS * 3600.0) as i64;
const MAX_ON_DUTY_WINDOW_SECS: i64 = (MAX_ON_DUTY_WINDOW_HOURS * 3600.0) as i64;
const MAX_CONSECUTIVE_DRIVING_SECS: i64 = (MAX_CONSECUTIVE_DRIVING_HOURS * 3600.0) as i64;
const SHORT_BREAK_SECS: i64 = (SHORT_BREAK_HOURS * 3600.0) as i64;
const TOUR_RESET_SECS: i64 = (TOUR_RESET_HOURS * 3600.0) as i64;
const WEEKLY_RESTART_SECS: i64 = (WEEKLY_RESTART_HOURS * 3600.0) as i64;
const WEEKLY_ON_DUTY_LIMIT_SECS: i64 = (WEEKLY_ON_DUTY_LIMIT_HOURS * 3600.0) as i64;

const REST_BREAK_10H_LABEL: &str = "Rest Break (10 hours)";
const SHORT_BREAK_LABEL: &str = "30-min Break";
const ON_DUTY_RESET_LABEL: &str = "14-hour Reset";
const RESTART_LABEL: &str = "34-hour Restart";
const OFF_DUTY_FILLER_LABEL: &str = "Off Duty";

/// Compute the day-aligned Record of Duty Status for one trip.
///
/// `start` is the absolute instant the driver begins; `tz` is the driver's
/// home IANA timezone used to partition the trip into local days.
/// `weekly_used_hours` is the on-duty time already accumulated over the
/// rolling 8-day window before this trip starts.
pub fn schedule(
    start: DateTime<Utc>,
    tz: Tz,
    segments: &[PlannedSegment],
    weekly_used_hours: f64,
) -> AppResult<Vec<DailyLog>> {
    validate_input(segments, weekly_used_hours)?;

    let mut scheduler = Scheduler::new(start, tz, weekly_used_hours);

    for segment in segments {
        if segment.duration_hours <= 0.0 {
            // Exactly-zero-duration segments are skipped; negative ones were
            // already rejected by `validate_input`.
            continue;
        }
        scheduler.process_segment(segment);
    }

    scheduler.run_postamble();

    let logs = scheduler.logs;
    if logs.is_empty() {
        return Err(AppError::Internal("scheduler produced no daily logs".to_string()));
    }
    verify_invariants(&logs)?;
    Ok(logs)
}

fn validate_input(segments: &[PlannedSegment], weekly_used_hours: f64) -> AppResult<()> {
    if !weekly_used_hours.is_finite() || weekly_used_hours < 0.0 {
        return Err(AppError::InvalidInput("weekly_used_hours must be a finite, non-negative number".to_string()));
    }
    for segment in segments {
        if !segment.duration_hours.is_finite() || segment.duration_hours < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "segment duration must be finite and non-negative, got {}",
                segment.duration_hours
            )));
        }
    }
    Ok(())
}

/// Running state for one schedule computation. Never shared across calls;
/// constructed fresh per invocation, so the scheduler is trivially re-entrant.
struct Scheduler {
    current: DateTime<Tz>,
    day_start: DateTime<Tz>,
    logs: Vec<DailyLog>,
    current_log: DailyLog,

    daily_driving_secs: i64,
    daily_on_duty_secs: i64,

    tour_driving_secs: i64,
    tour_on_duty_secs: i64,
    consecutive_driving_secs: i64,
    weekly_on_duty_secs: i64,
    contiguous_off_duty_secs: i64,
}

impl Scheduler {
    fn new(start: DateTime<Utc>, tz: Tz, weekly_used_hours: f64) -> Self {
        let local_start = start.with_timezone(&tz);
        let local_date = local_start.date_naive();
        let midnight = local_date.and_hms_opt(0, 0, 0).expect("00:00:00 is always a valid time");
        let day_start = match tz.from_local_datetime(&midnight) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(dt, _) => dt,
            LocalResult::None => local_start,
        };

        let mut scheduler = Self {
            current: day_start,
            day_start,
            logs: Vec::new(),
            current_log: DailyLog::new(day_start.date_naive()),
            daily_driving_secs: 0,
            daily_on_duty_secs: 0,
            tour_driving_secs: 0,
            tour_on_duty_secs: 0,
            consecutive_driving_secs: 0,
            weekly_on_duty_secs: to_secs(weekly_used_hours),
            contiguous_off_duty_secs: 0,
        };

        let gap_secs = local_start.signed_duration_since(day_start).num_seconds();
        if gap_secs > 0 {
            scheduler.push_duty(gap_secs, DutyStatus::OffDuty, OFF_DUTY_FILLER_LABEL);
        }

        if scheduler.weekly_on_duty_secs > to_secs(WEEKLY_ON_DUTY_LIMIT_HOURS) {
            scheduler.push_duty(to_secs(WEEKLY_RESTART_HOURS), DutyStatus::OffDuty, RESTART_LABEL);
        }

        scheduler
    }

    /// Process one planned segment to completion, inserting whatever
    /// regulatory breaks are needed to let it finish.
    fn process_segment(&mut self, segment: &PlannedSegment) {
        let mut remaining = to_secs(segment.duration_hours);

        while remaining > 0 {
            match segment.kind {
                SegmentType::Drive => {
                    if self.would_breach(self.tour_driving_secs, remaining, MAX_DRIVING_SECS) {
                        let room = (MAX_DRIVING_SECS - self.tour_driving_secs).max(0);
                        if room > 0 {
                            let chunk = room.min(remaining);
                            self.push_duty(chunk, DutyStatus::Driving, &segment.location);
                            remaining -= chunk;
                        }
                        if remaining > 0 {
                            self.push_duty(TOUR_RESET_SECS, DutyStatus::OffDuty, REST_BREAK_10H_LABEL);
                            self.reset_tour();
                        }
                    } else if self.consecutive_driving_secs + remaining > MAX_CONSECUTIVE_DRIVING_SECS {
                        let room = (MAX_CONSECUTIVE_DRIVING_SECS - self.consecutive_driving_secs).max(0);
                        if room > 0 {
                            let chunk = room.min(remaining);
                            self.push_duty(chunk, DutyStatus::Driving, &segment.location);
                            remaining -= chunk;
                        }
                        if remaining > 0 {
                            self.push_duty(SHORT_BREAK_SECS, DutyStatus::OffDuty, SHORT_BREAK_LABEL);
                            self.consecutive_driving_secs = 0;
                        }
                    } else {
                        self.push_duty(remaining, DutyStatus::Driving, &segment.location);
                        remaining = 0;
                    }
                }
                SegmentType::OnDuty => {
                    if self.tour_on_duty_secs + remaining > MAX_ON_DUTY_WINDOW_SECS {
                        let room = (MAX_ON_DUTY_WINDOW_SECS - self.tour_on_duty_secs).max(0);
                        if room > 0 {
                            let chunk = room.min(remaining);
                            self.push_duty(chunk, DutyStatus::OnDuty, &segment.location);
                            remaining -= chunk;
                        }
                        if remaining > 0 {
                            self.push_duty(TOUR_RESET_SECS, DutyStatus::OffDuty, ON_DUTY_RESET_LABEL);
                            self.reset_tour();
                        }
                    } else {
                        self.push_duty(remaining, DutyStatus::OnDuty, &segment.location);
                        remaining = 0;
                    }
                }
                SegmentType::OffDuty => {
                    self.push_duty(remaining, DutyStatus::OffDuty, &segment.location);
                    remaining = 0;
                }
            }
        }
    }

    /// True when driving the full `remaining` amount of a segment, on top of
    /// what's already been driven this tour, would reach or exceed `cap`.
    /// Uses the ε tolerance from the distilled spec's threshold language.
    fn would_breach(&self, tour_secs: i64, remaining: i64, cap: i64) -> bool {
        let epsilon_secs = (EPSILON * SECONDS_PER_HOUR) as i64;
        tour_secs + remaining >= cap - epsilon_secs
    }

    fn reset_tour(&mut self) {
        self.tour_driving_secs = 0;
        self.tour_on_duty_secs = 0;
        self.consecutive_driving_secs = 0;
    }

    /// Fill from `current` to the next local midnight with a trailing
    /// Off Duty entry, then close the final daily log.
    fn run_postamble(&mut self) {
        let room = self.secs_until_midnight();
        if room > 0 {
            self.push_duty(room, DutyStatus::OffDuty, OFF_DUTY_FILLER_LABEL);
        }
        self.finalize_and_push_log();
    }

    fn secs_until_midnight(&self) -> i64 {
        let next_midnight = self.day_start + Duration::hours(24);
        next_midnight.signed_duration_since(self.current).num_seconds()
    }

    /// Emit `secs` of `status` time starting at `current`, splitting across
    /// local midnight as many times as needed, updating running counters as
    /// each chunk lands.
    fn push_duty(&mut self, mut secs: i64, status: DutyStatus, location: &str) {
        while secs > 0 {
            self.roll_day_if_needed();
            let room = self.secs_until_midnight();
            let chunk = secs.min(room);

            self.emit_entry(chunk, status, location);
            self.current += Duration::seconds(chunk);
            self.update_counters(chunk, status);

            secs -= chunk;
        }
    }

    fn roll_day_if_needed(&mut self) {
        while self.secs_until_midnight() <= 0 {
            self.finalize_and_push_log();
            self.day_start += Duration::hours(24);
            self.current_log = DailyLog::new(self.day_start.date_naive());
        }
    }

    fn emit_entry(&mut self, chunk: i64, status: DutyStatus, location: &str) {
        let start_secs = self.current.signed_duration_since(self.day_start).num_seconds();
        let end_secs = start_secs + chunk;

        let entry = DutyEntry {
            start_time: hhmm(start_secs),
            end_time: hhmm(end_secs),
            status,
            location: location.to_string(),
            duration_hours: chunk as f64 / SECONDS_PER_HOUR,
        };
        self.current_log.entries.push(entry);
    }

    fn update_counters(&mut self, secs: i64, status: DutyStatus) {
        match status {
            DutyStatus::Driving => {
                self.daily_driving_secs += secs;
                self.daily_on_duty_secs += secs;
                self.tour_driving_secs = (self.tour_driving_secs + secs).min(MAX_DRIVING_SECS);
                self.tour_on_duty_secs = (self.tour_on_duty_secs + secs).min(MAX_ON_DUTY_WINDOW_SECS);
                self.consecutive_driving_secs =
                    (self.consecutive_driving_secs + secs).min(MAX_CONSECUTIVE_DRIVING_SECS);
                self.weekly_on_duty_secs = (self.weekly_on_duty_secs + secs).min(WEEKLY_ON_DUTY_LIMIT_SECS);
                self.contiguous_off_duty_secs = 0;
            }
            DutyStatus::OnDuty => {
                self.daily_on_duty_secs += secs;
                self.tour_on_duty_secs = (self.tour_on_duty_secs + secs).min(MAX_ON_DUTY_WINDOW_SECS);
                self.weekly_on_duty_secs = (self.weekly_on_duty_secs + secs).min(WEEKLY_ON_DUTY_LIMIT_SECS);
                self.contiguous_off_duty_secs = 0;
            }
            DutyStatus::OffDuty => {
                self.contiguous_off_duty_secs += secs;
                if secs >= SHORT_BREAK_SECS {
                    self.consecutive_driving_secs = 0;
                }
                if self.contiguous_off_duty_secs >= TOUR_RESET_SECS {
                    self.tour_driving_secs = 0;
                    self.tour_on_duty_secs = 0;
                }
                if self.contiguous_off_duty_secs >= WEEKLY_RESTART_SECS {
                    self.weekly_on_duty_secs = 0;
                }
            }
        }
    }

    /// `on_duty_hours` is the FMCSA 14-hour on-duty window total and so
    /// already includes driving time; `off_duty_hours` is therefore the
    /// residual `24 − driving − on_duty`, not the raw sum of off-duty
    /// entries, so the three totals always add to 24.
    fn finalize_and_push_log(&mut self) {
        let driving_hours = self.daily_driving_secs as f64 / SECONDS_PER_HOUR;
        let on_duty_hours = self.daily_on_duty_secs as f64 / SECONDS_PER_HOUR;
        self.current_log.totals = DutyTotals {
            driving_hours,
            on_duty_hours,
            off_duty_hours: 24.0 - driving_hours - on_duty_hours,
        };
        let log = std::mem::replace(&mut self.current_log, DailyLog::new(self.day_start.date_naive()));
        self.logs.push(log);
        self.daily_driving_secs = 0;
        self.daily_on_duty_secs = 0;
    }
}

fn hhmm(secs_of_day: i64) -> String {
    let minutes_total = secs_of_day / 60;
    format!("{:02}:{:02}", minutes_total / 60, minutes_total % 60)
}

/// Self-check of the §8 invariants before returning a schedule to the caller.
/// A violation indicates a bug in the scheduler, not malformed input, so it
/// is surfaced as `AppError::Internal`.
fn verify_invariants(logs: &[DailyLog]) -> AppResult<()> {
    for log in logs {
        let sum: f64 = log.entries.iter().map(|e| e.duration_hours).sum();
        if (sum - 24.0).abs() > EPSILON {
            return Err(AppError::Internal(format!(
                "daily log for {} sums to {} hours, expected 24",
                log.date, sum
            )));
        }

        let totals_sum = log.totals.driving_hours + log.totals.on_duty_hours + log.totals.off_duty_hours;
        if (totals_sum - 24.0).abs() > EPSILON {
            return Err(AppError::Internal(format!(
                "daily log for {} totals sum to {} hours, expected 24",
                log.date, totals_sum
            )));
        }

        if log.totals.driving_hours > MAX_DRIVING_HOURS + EPSILON {
            return Err(AppError::Internal(format!(
                "daily log for {} exceeds the 11-hour driving limit: {}",
                log.date, log.totals.driving_hours
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlannedSegment, SegmentType};
    use chrono::TimeZone as _;

    fn utc(y: i32, m: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, mi, 0).unwrap()
    }

    #[test]
    fn scenario_1_short_trip_single_day() {
        let start = utc(2025, 1, 15, 8, 0);
        let segments = vec![
            PlannedSegment::new(SegmentType::OnDuty, 1.0, "Pickup"),
            PlannedSegment::new(SegmentType::Drive, 5.0, "Route"),
            PlannedSegment::new(SegmentType::OnDuty, 1.0, "Drop-off"),
        ];

        let logs = schedule(start, chrono_tz::UTC, &segments, 0.0).unwrap();

        assert_eq!(logs.len(), 1);
        let log = &logs[0];
        assert_eq!(log.date, chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert_eq!(log.entries.len(), 5);

        assert_eq!(log.entries[0].start_time, "00:00");
        assert_eq!(log.entries[0].end_time, "08:00");
        assert_eq!(log.entries[0].status, DutyStatus::OffDuty);

        assert_eq!(log.entries[1].start_time, "08:00");
        assert_eq!(log.entries[1].end_time, "09:00");
        assert_eq!(log.entries[1].status, DutyStatus::OnDuty);

        assert_eq!(log.entries[2].start_time, "09:00");
        assert_eq!(log.entries[2].end_time, "14:00");
        assert_eq!(log.entries[2].status, DutyStatus::Driving);

        assert_eq!(log.entries[3].start_time, "14:00");
        assert_eq!(log.entries[3].end_time, "15:00");
        assert_eq!(log.entries[3].status, DutyStatus::OnDuty);

        assert_eq!(log.entries[4].start_time, "15:00");
        assert_eq!(log.entries[4].end_time, "24:00");
        assert_eq!(log.entries[4].status, DutyStatus::OffDuty);

        assert!((log.totals.driving_hours - 5.0).abs() < 1e-9);
        assert!((log.totals.on_duty_hours - 7.0).abs() < 1e-9);
        assert!((log.totals.off_duty_hours - 12.0).abs() < 1e-9);
    }

    #[test]
    fn scenario_2_twelve_hour_drive_inserts_ten_hour_rest() {
        let start = utc(2025, 1, 15, 8, 0);
        let segments = vec![PlannedSegment::new(SegmentType::Drive, 12.0, "Route")];

        let logs = schedule(start, chrono_tz::UTC, &segments, 0.0).unwrap();

        let all_entries: Vec<&DutyEntry> = logs.iter().flat_map(|l| l.entries.iter()).collect();
        let driving: Vec<&&DutyEntry> = all_entries.iter().filter(|e| e.status == DutyStatus::Driving).collect();
        let rests: Vec<&&DutyEntry> = all_entries
            .iter()
            .filter(|e| e.status == DutyStatus::OffDuty && e.location == REST_BREAK_10H_LABEL)
            .collect();

        assert_eq!(driving.len(), 2);
        assert!((driving[0].duration_hours - 11.0).abs() < 1e-9);
        assert!((driving[1].duration_hours - 1.0).abs() < 1e-9);

        assert_eq!(rests.len(), 1);
        assert!((rests[0].duration_hours - 10.0).abs() < 1e-9);

        assert_eq!(logs.len(), 2, "12h drive + 10h rest must cross into day+1");
    }

    #[test]
    fn scenario_3_nine_hour_drive_inserts_thirty_minute_break() {
        let start = utc(2025, 1, 15, 8, 0);
        let segments = vec![PlannedSegment::new(SegmentType::Drive, 9.0, "Route")];

        let logs = schedule(start, chrono_tz::UTC, &segments, 0.0).unwrap();
        let all_entries: Vec<&DutyEntry> = logs.iter().flat_map(|l| l.entries.iter()).collect();

        let rests: Vec<&&DutyEntry> = all_entries
            .iter()
            .filter(|e| e.status == DutyStatus::OffDuty && e.location == SHORT_BREAK_LABEL)
            .collect();
        assert_eq!(rests.len(), 1);
        assert!((rests[0].duration_hours - 0.5).abs() < 1e-9);

        let ten_hour_rests = all_entries
            .iter()
            .filter(|e| e.location == REST_BREAK_10H_LABEL)
            .count();
        assert_eq!(ten_hour_rests, 0, "no 10-hour rest should appear for a 9-hour drive");

        let driving: Vec<&&DutyEntry> = all_entries.iter().filter(|e| e.status == DutyStatus::Driving).collect();
        assert_eq!(driving.len(), 2);
        assert!((driving[0].duration_hours - 8.0).abs() < 1e-9);
        assert!((driving[1].duration_hours - 1.0).abs() < 1e-9);
    }

    #[test]
    fn scenario_4_weekly_used_75_triggers_restart() {
        let start = utc(2025, 1, 15, 8, 0);
        let segments = vec![PlannedSegment::new(SegmentType::Drive, 2.0, "Route")];

        let logs = schedule(start, chrono_tz::UTC, &segments, 75.0).unwrap();
        let all_entries: Vec<&DutyEntry> = logs.iter().flat_map(|l| l.entries.iter()).collect();

        let first_restart = all_entries
            .iter()
            .find(|e| e.location == RESTART_LABEL)
            .expect("34-hour restart must be emitted");
        assert!((first_restart.duration_hours - 34.0).abs() < 1e-9);

        assert!(logs.len() >= 2);
    }

    #[test]
    fn scenario_5_crosses_midnight_mid_drive() {
        let start = utc(2025, 1, 15, 22, 0);
        let segments = vec![PlannedSegment::new(SegmentType::Drive, 4.0, "Route")];

        let logs = schedule(start, chrono_tz::UTC, &segments, 0.0).unwrap();

        assert_eq!(logs.len(), 2);
        let day1_driving: f64 = logs[0]
            .entries
            .iter()
            .filter(|e| e.status == DutyStatus::Driving)
            .map(|e| e.duration_hours)
            .sum();
        let day2_driving: f64 = logs[1]
            .entries
            .iter()
            .filter(|e| e.status == DutyStatus::Driving)
            .map(|e| e.duration_hours)
            .sum();

        assert!((day1_driving - 2.0).abs() < 1e-9);
        assert!((day2_driving - 2.0).abs() < 1e-9);

        let last_day1 = logs[0].entries.last().unwrap();
        assert_eq!(last_day1.end_time, "24:00");
        let first_day2 = logs[1].entries.first().unwrap();
        assert_eq!(first_day2.start_time, "00:00");
    }

    #[test]
    fn scenario_6_long_trip_planner_prealigned_rests_are_not_doubled() {
        let start = utc(2025, 1, 15, 6, 0);
        let segments = vec![
            PlannedSegment::new(SegmentType::Drive, 11.0, "En Route"),
            PlannedSegment::new(SegmentType::OffDuty, 10.0, "Rest Break"),
            PlannedSegment::new(SegmentType::Drive, 11.0, "En Route"),
            PlannedSegment::new(SegmentType::OffDuty, 10.0, "Rest Break"),
            PlannedSegment::new(SegmentType::Drive, 8.0, "En Route"),
        ];

        let logs = schedule(start, chrono_tz::UTC, &segments, 0.0).unwrap();
        let all_entries: Vec<&DutyEntry> = logs.iter().flat_map(|l| l.entries.iter()).collect();

        let ten_hour_breaks = all_entries
            .iter()
            .filter(|e| e.duration_hours >= 10.0 - 1e-9 && e.status == DutyStatus::OffDuty)
            .count();
        assert_eq!(ten_hour_breaks, 2, "scheduler must not insert extra rests beyond the planner's two");

        let total_drive: f64 = all_entries
            .iter()
            .filter(|e| e.status == DutyStatus::Driving)
            .map(|e| e.duration_hours)
            .sum();
        assert!((total_drive - 30.0).abs() < 1e-6);
    }

    #[test]
    fn invariant_entries_sum_to_24_hours_per_day() {
        let start = utc(2025, 1, 15, 8, 0);
        let segments = vec![
            PlannedSegment::new(SegmentType::OnDuty, 1.0, "Pickup"),
            PlannedSegment::new(SegmentType::Drive, 20.0, "Route"),
            PlannedSegment::new(SegmentType::OnDuty, 1.0, "Drop-off"),
        ];

        let logs = schedule(start, chrono_tz::UTC, &segments, 0.0).unwrap();
        for log in &logs {
            let sum: f64 = log.entries.iter().map(|e| e.duration_hours).sum();
            assert!((sum - 24.0).abs() < 1e-6, "day {} sums to {}", log.date, sum);

            let total_from_totals =
                log.totals.driving_hours + log.totals.on_duty_hours + log.totals.off_duty_hours;
            assert!((total_from_totals - 24.0).abs() < 1e-6);
        }
    }

    #[test]
    fn invariant_no_day_exceeds_eleven_hours_driving() {
        let start = utc(2025, 1, 15, 0, 0);
        let segments = vec![PlannedSegment::new(SegmentType::Drive, 40.0, "Route")];

        let logs = schedule(start, chrono_tz::UTC, &segments, 0.0).unwrap();
        for log in &logs {
            assert!(log.totals.driving_hours <= 11.0 + 1e-6, "day {} drove {}", log.date, log.totals.driving_hours);
        }
    }

    #[test]
    fn concatenation_invariant_splitting_a_segment_is_equivalent() {
        let start = utc(2025, 1, 15, 8, 0);

        let whole = vec![PlannedSegment::new(SegmentType::Drive, 12.0, "Route")];
        let split = vec![
            PlannedSegment::new(SegmentType::Drive, 11.0, "Route"),
            PlannedSegment::new(SegmentType::Drive, 1.0, "Route"),
        ];

        let logs_whole = schedule(start, chrono_tz::UTC, &whole, 0.0).unwrap();
        let logs_split = schedule(start, chrono_tz::UTC, &split, 0.0).unwrap();

        assert_eq!(logs_whole.len(), logs_split.len());
        for (a, b) in logs_whole.iter().zip(logs_split.iter()) {
            assert_eq!(a.entries.len(), b.entries.len());
            for (ea, eb) in a.entries.iter().zip(b.entries.iter()) {
                assert_eq!(ea.start_time, eb.start_time);
                assert_eq!(ea.end_time, eb.end_time);
                assert_eq!(ea.status, eb.status);
                assert!((ea.duration_hours - eb.duration_hours).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn idempotence_equal_inputs_produce_equal_outputs() {
        let start = utc(2025, 1, 15, 8, 0);
        let segments = vec![
            PlannedSegment::new(SegmentType::OnDuty, 1.0, "Pickup"),
            PlannedSegment::new(SegmentType::Drive, 9.5, "Route"),
            PlannedSegment::new(SegmentType::OnDuty, 1.0, "Drop-off"),
        ];

        let logs1 = schedule(start, chrono_tz::UTC, &segments, 12.5).unwrap();
        let logs2 = schedule(start, chrono_tz::UTC, &segments, 12.5).unwrap();

        assert_eq!(logs1.len(), logs2.len());
        for (a, b) in logs1.iter().zip(logs2.iter()) {
            assert_eq!(a.entries.len(), b.entries.len());
        }
    }

    #[test]
    fn rejects_negative_segment_duration() {
        let start = utc(2025, 1, 15, 8, 0);
        let segments = vec![PlannedSegment::new(SegmentType::Drive, -1.0, "Route")];
        let result = schedule(start, chrono_tz::UTC, &segments, 0.0);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn rejects_nan_weekly_used_hours() {
        let start = utc(2025, 1, 15, 8, 0);
        let segments = vec![PlannedSegment::new(SegmentType::Drive, 1.0, "Route")];
        let result = schedule(start, chrono_tz::UTC, &segments, f64::NAN);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn zero_duration_segment_is_skipped() {
        let start = utc(2025, 1, 15, 8, 0);
        let segments = vec![
            PlannedSegment::new(SegmentType::Drive, 0.0, "Route"),
            PlannedSegment::new(SegmentType::Drive, 1.0, "Route"),
        ];
        let logs = schedule(start, chrono_tz::UTC, &segments, 0.0).unwrap();
        let driving_entries = logs[0].entries.iter().filter(|e| e.status == DutyStatus::Driving).count();
        assert_eq!(driving_entries, 1);
    }

    #[test]
    fn non_utc_timezone_partitions_days_in_local_time() {
        // 2025-01-15T23:00 UTC is 2025-01-15T18:00 in America/New_York (UTC-5 in January).
        let start = utc(2025, 1, 15, 23, 0);
        let segments = vec![PlannedSegment::new(SegmentType::Drive, 2.0, "Route")];

        let logs = schedule(start, chrono_tz::America::New_York, &segments, 0.0).unwrap();

        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].date, chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert_eq!(logs[0].entries[0].start_time, "00:00");
    }
}
