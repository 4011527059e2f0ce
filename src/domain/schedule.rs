use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::weekday::DAYS_PER_WEEK;

/// Reasons a schedule window is rejected before it is stored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("start time {start} must be before end time {end}")]
    EmptyWindow { start: NaiveTime, end: NaiveTime },
    #[error("effective date {effective_on} is after expiry date {expires_on}")]
    InvertedDateRange {
        effective_on: NaiveDate,
        expires_on: NaiveDate,
    },
    #[error("day of week {0} is outside 0..=6")]
    DayOutOfRange(i32),
    #[error("replacement must take effect after {current}, got {replacement}")]
    ReplacementNotLater {
        current: NaiveDate,
        replacement: NaiveDate,
    },
    #[error("replacement must keep the same associate and location")]
    ReplacementTargetMismatch,
}

/// A recurring weekly availability window of an associate at a location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    /// Unique identifier of the schedule rule.
    pub id: i32,
    /// Associate whose calendar the window belongs to.
    pub associate_id: i32,
    /// Location where the associate works during the window.
    pub location_id: i32,
    /// Local start of the window.
    pub start_time: NaiveTime,
    /// Local end of the window (exclusive).
    pub end_time: NaiveTime,
    /// Stored day index, interpreted through a `DayOfWeekConvention`.
    pub day_of_week: i32,
    /// First date (inclusive) the rule applies.
    pub effective_on: NaiveDate,
    /// Last date (inclusive) the rule applies.
    pub expires_on: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl Schedule {
    /// Whether `date` lies inside `[effective_on, expires_on]`.
    pub fn is_effective_on(&self, date: NaiveDate) -> bool {
        self.effective_on <= date && date <= self.expires_on
    }

    /// Whether the rule is in force for at least one day of `[from, to]`.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.effective_on <= to && from <= self.expires_on
    }
}

/// Payload required to insert a new schedule rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSchedule {
    pub associate_id: i32,
    pub location_id: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub day_of_week: i32,
    pub effective_on: NaiveDate,
    pub expires_on: NaiveDate,
}

impl NewSchedule {
    /// Build and validate a schedule rule.
    pub fn new(
        associate_id: i32,
        location_id: i32,
        day_of_week: i32,
        (start_time, end_time): (NaiveTime, NaiveTime),
        (effective_on, expires_on): (NaiveDate, NaiveDate),
    ) -> Result<Self, ScheduleError> {
        let schedule = Self {
            associate_id,
            location_id,
            start_time,
            end_time,
            day_of_week,
            effective_on,
            expires_on,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Check the window invariants that storage relies on.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.start_time >= self.end_time {
            return Err(ScheduleError::EmptyWindow {
                start: self.start_time,
                end: self.end_time,
            });
        }
        if self.effective_on > self.expires_on {
            return Err(ScheduleError::InvertedDateRange {
                effective_on: self.effective_on,
                expires_on: self.expires_on,
            });
        }
        if !(0..DAYS_PER_WEEK).contains(&self.day_of_week) {
            return Err(ScheduleError::DayOutOfRange(self.day_of_week));
        }
        Ok(())
    }

    /// Check that this rule may replace `current` from its own effective date on.
    ///
    /// Returns the truncated expiry date for `current`.
    pub fn supersedes(&self, current: &Schedule) -> Result<NaiveDate, ScheduleError> {
        self.validate()?;
        if self.associate_id != current.associate_id || self.location_id != current.location_id
        {
            return Err(ScheduleError::ReplacementTargetMismatch);
        }
        let not_later = ScheduleError::ReplacementNotLater {
            current: current.effective_on,
            replacement: self.effective_on,
        };
        if self.effective_on <= current.effective_on {
            return Err(not_later);
        }
        let day_before = self.effective_on.pred_opt().ok_or(not_later)?;
        Ok(day_before.min(current.expires_on))
    }
}

/// Filters applied when listing schedule rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleListQuery {
    pub associate_id: Option<i32>,
    pub location_id: Option<i32>,
    /// Only rules in force for at least one day of this inclusive range.
    pub active_between: Option<(NaiveDate, NaiveDate)>,
}

impl ScheduleListQuery {
    /// Construct a query over every rule of `associate_id`.
    pub fn for_associate(associate_id: i32) -> Self {
        Self {
            associate_id: Some(associate_id),
            ..Self::default()
        }
    }

    /// Restrict the query to rules at `location_id`.
    pub fn at_location(mut self, location_id: i32) -> Self {
        self.location_id = Some(location_id);
        self
    }

    /// Restrict the query to rules overlapping `[from, to]`.
    pub fn active_between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.active_between = Some((from, to));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
    }

    fn stored(new: NewSchedule) -> Schedule {
        Schedule {
            id: 1,
            associate_id: new.associate_id,
            location_id: new.location_id,
            start_time: new.start_time,
            end_time: new.end_time,
            day_of_week: new.day_of_week,
            effective_on: new.effective_on,
            expires_on: new.expires_on,
            created_at: date(2024, 9, 1).and_time(time(0, 0)),
        }
    }

    #[test]
    fn new_schedule_accepts_valid_window() {
        let schedule = NewSchedule::new(
            1,
            2,
            0,
            (time(6, 0), time(11, 0)),
            (date(2024, 10, 1), date(2025, 3, 1)),
        );
        assert!(schedule.is_ok());
    }

    #[test]
    fn new_schedule_rejects_empty_window() {
        let result = NewSchedule::new(
            1,
            2,
            0,
            (time(11, 0), time(11, 0)),
            (date(2024, 10, 1), date(2025, 3, 1)),
        );
        assert!(matches!(result, Err(ScheduleError::EmptyWindow { .. })));
    }

    #[test]
    fn new_schedule_rejects_inverted_dates() {
        let result = NewSchedule::new(
            1,
            2,
            0,
            (time(6, 0), time(11, 0)),
            (date(2025, 3, 2), date(2025, 3, 1)),
        );
        assert!(matches!(
            result,
            Err(ScheduleError::InvertedDateRange { .. })
        ));
    }

    #[test]
    fn new_schedule_accepts_single_day_range() {
        let result = NewSchedule::new(
            1,
            2,
            6,
            (time(6, 0), time(11, 0)),
            (date(2025, 3, 1), date(2025, 3, 1)),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn new_schedule_rejects_day_out_of_range() {
        let result = NewSchedule::new(
            1,
            2,
            7,
            (time(6, 0), time(11, 0)),
            (date(2024, 10, 1), date(2025, 3, 1)),
        );
        assert_eq!(result, Err(ScheduleError::DayOutOfRange(7)));
    }

    #[test]
    fn effective_range_is_inclusive() {
        let schedule = stored(
            NewSchedule::new(
                1,
                2,
                0,
                (time(6, 0), time(11, 0)),
                (date(2024, 10, 1), date(2025, 3, 1)),
            )
            .expect("valid schedule"),
        );

        assert!(schedule.is_effective_on(date(2024, 10, 1)));
        assert!(schedule.is_effective_on(date(2025, 3, 1)));
        assert!(!schedule.is_effective_on(date(2025, 3, 2)));
        assert!(schedule.overlaps(date(2025, 3, 1), date(2025, 4, 1)));
        assert!(!schedule.overlaps(date(2025, 3, 2), date(2025, 4, 1)));
    }

    #[test]
    fn supersedes_truncates_current_expiry() {
        let current = stored(
            NewSchedule::new(
                1,
                2,
                0,
                (time(6, 0), time(11, 0)),
                (date(2024, 10, 1), date(2025, 3, 1)),
            )
            .expect("valid schedule"),
        );
        let replacement = NewSchedule::new(
            1,
            2,
            0,
            (time(8, 0), time(12, 0)),
            (date(2025, 1, 1), date(2025, 6, 1)),
        )
        .expect("valid schedule");

        assert_eq!(replacement.supersedes(&current), Ok(date(2024, 12, 31)));
    }

    #[test]
    fn supersedes_rejects_earlier_or_foreign_replacement() {
        let current = stored(
            NewSchedule::new(
                1,
                2,
                0,
                (time(6, 0), time(11, 0)),
                (date(2024, 10, 1), date(2025, 3, 1)),
            )
            .expect("valid schedule"),
        );
        let earlier = NewSchedule::new(
            1,
            2,
            0,
            (time(8, 0), time(12, 0)),
            (date(2024, 10, 1), date(2025, 6, 1)),
        )
        .expect("valid schedule");
        let elsewhere = NewSchedule::new(
            1,
            3,
            0,
            (time(8, 0), time(12, 0)),
            (date(2025, 1, 1), date(2025, 6, 1)),
        )
        .expect("valid schedule");

        assert!(matches!(
            earlier.supersedes(&current),
            Err(ScheduleError::ReplacementNotLater { .. })
        ));
        assert_eq!(
            elsewhere.supersedes(&current),
            Err(ScheduleError::ReplacementTargetMismatch)
        );
    }
}
