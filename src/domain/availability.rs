//! Derivation of bookable time windows from recurring schedule rules.
//!
//! Schedules stay flat weekly rules; concrete windows are produced per query for
//! the requested dates only.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
};
use chrono_tz::Tz;
use serde::Serialize;
use thiserror::Error;

use crate::domain::appointment::Appointment;
use crate::domain::schedule::Schedule;
use crate::domain::weekday::DayOfWeekConvention;

/// Longest date range accepted by a single availability query.
pub const MAX_QUERY_DAYS: i64 = 366;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvailabilityError {
    #[error("range start {from} is after range end {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },
    #[error("range spans {days} days, at most {max} are allowed", max = MAX_QUERY_DAYS)]
    RangeTooLong { days: i64 },
    #[error("local time {0} cannot be placed in the associate's timezone")]
    UnrepresentableTime(NaiveDateTime),
}

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, AvailabilityError> {
        if from > to {
            return Err(AvailabilityError::InvalidRange { from, to });
        }
        let days = (to - from).num_days() + 1;
        if days > MAX_QUERY_DAYS {
            return Err(AvailabilityError::RangeTooLong { days });
        }
        Ok(Self { from, to })
    }

    pub fn single(date: NaiveDate) -> Self {
        Self { from: date, to: date }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Every date of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |day| *day <= to)
    }
}

/// A concrete window in which an associate is available at a location.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub associate_id: i32,
    pub location_id: i32,
    /// Inclusive start, carrying the associate's UTC offset at that instant.
    pub start: DateTime<FixedOffset>,
    /// Exclusive end.
    pub end: DateTime<FixedOffset>,
}

impl AvailabilityWindow {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Parts of the window left over once `booked` is removed.
    fn without(self, booked: &BookedInterval) -> Vec<AvailabilityWindow> {
        if booked.end <= self.start || booked.start >= self.end {
            return vec![self];
        }
        let mut remaining = Vec::with_capacity(2);
        if booked.start > self.start {
            remaining.push(AvailabilityWindow {
                end: booked.start,
                ..self.clone()
            });
        }
        if booked.end < self.end {
            remaining.push(AvailabilityWindow {
                start: booked.end,
                ..self
            });
        }
        remaining
    }
}

/// An already-booked interval of one associate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedInterval {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl BookedInterval {
    /// Place an appointment's local times in the associate's timezone.
    pub fn from_appointment(appointment: &Appointment, tz: Tz) -> Result<Self, AvailabilityError> {
        let (start, end) = appointment.local_bounds();
        Ok(Self {
            start: localize(tz, start)?,
            end: localize(tz, end)?,
        })
    }
}

/// Convert an associate-local wall-clock time to an absolute instant.
///
/// Ambiguous times (clocks going back) resolve to the earlier instant. Times that
/// fall in a gap (clocks going forward) move later by the length of the gap.
pub fn localize(tz: Tz, local: NaiveDateTime) -> Result<DateTime<FixedOffset>, AvailabilityError> {
    if let Some(instant) = tz.from_local_datetime(&local).earliest() {
        return Ok(instant.fixed_offset());
    }

    // Read the wall clock with the offset in force before the gap.
    let day_before = local - TimeDelta::days(1);
    let offset_before = tz
        .from_local_datetime(&day_before)
        .earliest()
        .map(|instant| instant.fixed_offset().offset().local_minus_utc())
        .ok_or(AvailabilityError::UnrepresentableTime(local))?;
    let utc = local - TimeDelta::seconds(i64::from(offset_before));

    Ok(tz.from_utc_datetime(&utc).fixed_offset())
}

/// Union of possibly overlapping time ranges, sorted by start.
///
/// Ranges that touch (`end == next start`) are joined as well.
pub fn merge_time_ranges(mut ranges: Vec<(NaiveTime, NaiveTime)>) -> Vec<(NaiveTime, NaiveTime)> {
    ranges.sort_unstable();
    let mut merged: Vec<(NaiveTime, NaiveTime)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1 => {
                if end > last.1 {
                    last.1 = end;
                }
            }
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Resolve the availability of one associate at one location over `range`.
///
/// Only rules of that associate and location that recur on a date's weekday and
/// are in force on that date contribute. The result is ordered by start and
/// contains no overlapping windows.
pub fn resolve_windows(
    associate_id: i32,
    location_id: i32,
    tz: Tz,
    schedules: &[Schedule],
    range: DateRange,
    convention: DayOfWeekConvention,
) -> Result<Vec<AvailabilityWindow>, AvailabilityError> {
    let rules: Vec<&Schedule> = schedules
        .iter()
        .filter(|rule| rule.associate_id == associate_id && rule.location_id == location_id)
        .filter(|rule| rule.overlaps(range.from(), range.to()))
        .collect();

    let mut windows = Vec::new();
    if rules.is_empty() {
        return Ok(windows);
    }

    let mut placed = Vec::new();
    for date in range.days() {
        let day_of_week = convention.index_of(date.weekday());
        let ranges: Vec<(NaiveTime, NaiveTime)> = rules
            .iter()
            .filter(|rule| rule.day_of_week == day_of_week && rule.is_effective_on(date))
            .map(|rule| (rule.start_time, rule.end_time))
            .collect();

        for (start, end) in merge_time_ranges(ranges) {
            let start = localize(tz, date.and_time(start))?;
            let end = localize(tz, date.and_time(end))?;
            if start < end {
                placed.push((start, end));
            }
        }
    }
    // Gap shifts can reorder or overlap ranges that were disjoint on the clock.
    placed.sort_unstable();

    for (start, end) in placed {
        match windows.last_mut() {
            Some(last) if start <= last.end => {
                if end > last.end {
                    last.end = end;
                }
            }
            _ => windows.push(AvailabilityWindow {
                associate_id,
                location_id,
                start,
                end,
            }),
        }
    }

    Ok(windows)
}

/// Remove booked intervals from `windows` and drop pieces shorter than `min_duration`.
pub fn subtract_bookings(
    windows: Vec<AvailabilityWindow>,
    booked: &[BookedInterval],
    min_duration: TimeDelta,
) -> Vec<AvailabilityWindow> {
    let mut free = Vec::with_capacity(windows.len());
    for window in windows {
        let mut pieces = vec![window];
        for interval in booked {
            pieces = pieces
                .into_iter()
                .flat_map(|piece| piece.without(interval))
                .collect();
        }
        free.extend(
            pieces
                .into_iter()
                .filter(|piece| piece.duration() >= min_duration),
        );
    }
    free
}
