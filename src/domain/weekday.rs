use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of days in the recurring schedule week.
pub const DAYS_PER_WEEK: i32 = 7;

/// Numbering used for the stored `day_of_week` column.
///
/// Stored rows only carry an integer, so whether `0` names Sunday or Monday is
/// decided by configuration rather than by the data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeekConvention {
    /// `0` = Sunday ... `6` = Saturday.
    #[default]
    SundayZero,
    /// `0` = Monday ... `6` = Sunday.
    MondayZero,
}

impl DayOfWeekConvention {
    /// Index stored in `day_of_week` for the given weekday.
    pub fn index_of(self, weekday: Weekday) -> i32 {
        let index = match self {
            Self::SundayZero => weekday.num_days_from_sunday(),
            Self::MondayZero => weekday.num_days_from_monday(),
        };
        index as i32
    }

    /// Weekday named by a stored `day_of_week`, if the index is in range.
    pub fn weekday(self, index: i32) -> Option<Weekday> {
        if !(0..DAYS_PER_WEEK).contains(&index) {
            return None;
        }
        let first = match self {
            Self::SundayZero => Weekday::Sun,
            Self::MondayZero => Weekday::Mon,
        };
        Some((0..index).fold(first, |day, _| day.succ()))
    }
}

impl fmt::Display for DayOfWeekConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SundayZero => f.write_str("sunday"),
            Self::MondayZero => f.write_str("monday"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown week start `{0}`, expected `sunday` or `monday`")]
pub struct UnknownWeekStart(pub String);

impl FromStr for DayOfWeekConvention {
    type Err = UnknownWeekStart;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" | "sunday_zero" => Ok(Self::SundayZero),
            "monday" | "mon" | "monday_zero" => Ok(Self::MondayZero),
            _ => Err(UnknownWeekStart(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_zero_numbers_sunday_first() {
        let convention = DayOfWeekConvention::SundayZero;
        assert_eq!(convention.index_of(Weekday::Sun), 0);
        assert_eq!(convention.index_of(Weekday::Thu), 4);
        assert_eq!(convention.index_of(Weekday::Sat), 6);
    }

    #[test]
    fn monday_zero_numbers_monday_first() {
        let convention = DayOfWeekConvention::MondayZero;
        assert_eq!(convention.index_of(Weekday::Mon), 0);
        assert_eq!(convention.index_of(Weekday::Sun), 6);
    }

    #[test]
    fn weekday_inverts_index_of() {
        for convention in [
            DayOfWeekConvention::SundayZero,
            DayOfWeekConvention::MondayZero,
        ] {
            for index in 0..DAYS_PER_WEEK {
                let weekday = convention.weekday(index).expect("index in range");
                assert_eq!(convention.index_of(weekday), index);
            }
            assert_eq!(convention.weekday(7), None);
            assert_eq!(convention.weekday(-1), None);
        }
    }

    #[test]
    fn parses_configuration_values() {
        assert_eq!(
            " Monday ".parse::<DayOfWeekConvention>(),
            Ok(DayOfWeekConvention::MondayZero)
        );
        assert_eq!(
            "sun".parse::<DayOfWeekConvention>(),
            Ok(DayOfWeekConvention::SundayZero)
        );
        assert!("friday".parse::<DayOfWeekConvention>().is_err());
    }
}
