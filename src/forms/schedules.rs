use std::io::Cursor;

use chrono::{NaiveDate, NaiveTime};
use csv::{StringRecord, Trim};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::schedule::{NewSchedule, Schedule, ScheduleError};
use crate::domain::weekday::DAYS_PER_WEEK;
use crate::forms::{locate_header, parse_clock_time};

const LAST_DAY_INDEX: i32 = DAYS_PER_WEEK - 1;

/// Result type returned by the schedule form helpers.
pub type ScheduleFormResult<T> = Result<T, ScheduleFormError>;

/// Errors that can occur while processing schedule forms and uploads.
#[derive(Debug, Error)]
pub enum ScheduleFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("invalid time `{0}`, expected HH:MM")]
    InvalidTime(String),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error("upload is missing the `{0}` header")]
    MissingHeader(&'static str),
    #[error("row {row}: invalid `{column}` value `{value}`")]
    UploadInvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("row {row}: {source}")]
    UploadInvalidSchedule { row: usize, source: ScheduleError },
    #[error("upload contains no schedules")]
    EmptyUpload,
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// JSON payload describing one recurring weekly window.
#[derive(Debug, Deserialize, Validate)]
pub struct AddScheduleForm {
    #[validate(range(min = 1))]
    pub associate_id: i32,
    #[validate(range(min = 1))]
    pub location_id: i32,
    #[validate(range(min = 0, max = LAST_DAY_INDEX))]
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub effective_on: NaiveDate,
    pub expires_on: NaiveDate,
}

impl AddScheduleForm {
    pub fn into_new_schedule(self) -> ScheduleFormResult<NewSchedule> {
        self.validate()?;
        let window = (time_field(&self.start_time)?, time_field(&self.end_time)?);
        Ok(NewSchedule::new(
            self.associate_id,
            self.location_id,
            self.day_of_week,
            window,
            (self.effective_on, self.expires_on),
        )?)
    }
}

/// JSON payload replacing a schedule from a later date onwards.
///
/// The replacement keeps the associate and location of the rule it supersedes.
#[derive(Debug, Deserialize, Validate)]
pub struct SupersedeScheduleForm {
    #[validate(range(min = 0, max = LAST_DAY_INDEX))]
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub effective_on: NaiveDate,
    pub expires_on: NaiveDate,
}

impl SupersedeScheduleForm {
    pub fn into_replacement(self, current: &Schedule) -> ScheduleFormResult<NewSchedule> {
        self.validate()?;
        let window = (time_field(&self.start_time)?, time_field(&self.end_time)?);
        let replacement = NewSchedule::new(
            current.associate_id,
            current.location_id,
            self.day_of_week,
            window,
            (self.effective_on, self.expires_on),
        )?;
        replacement.supersedes(current)?;
        Ok(replacement)
    }
}

/// Raw CSV body used for bulk schedule creation.
///
/// Expected headers: `associate_id`, `location_id`, `day_of_week`, `start_time`,
/// `end_time`, `effective_on`, `expires_on` (any order, case-insensitive).
#[derive(Debug)]
pub struct UploadSchedulesForm {
    pub bytes: Vec<u8>,
}

impl UploadSchedulesForm {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Parse every row, failing on the first invalid one.
    pub fn into_new_schedules(self) -> ScheduleFormResult<Vec<NewSchedule>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(Cursor::new(self.bytes));

        let headers = reader.headers()?.clone();
        let columns = ScheduleColumns::locate(&headers)?;

        let mut schedules = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row_number = index + 2; // account for header row
            let record = row?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            schedules.push(columns.parse_row(&record, row_number)?);
        }

        if schedules.is_empty() {
            return Err(ScheduleFormError::EmptyUpload);
        }

        Ok(schedules)
    }
}

struct ScheduleColumns {
    associate_id: usize,
    location_id: usize,
    day_of_week: usize,
    start_time: usize,
    end_time: usize,
    effective_on: usize,
    expires_on: usize,
}

impl ScheduleColumns {
    fn locate(headers: &StringRecord) -> ScheduleFormResult<Self> {
        let find = |name: &'static str| {
            locate_header(headers, name).ok_or(ScheduleFormError::MissingHeader(name))
        };

        Ok(Self {
            associate_id: find("associate_id")?,
            location_id: find("location_id")?,
            day_of_week: find("day_of_week")?,
            start_time: find("start_time")?,
            end_time: find("end_time")?,
            effective_on: find("effective_on")?,
            expires_on: find("expires_on")?,
        })
    }

    fn parse_row(&self, record: &StringRecord, row: usize) -> ScheduleFormResult<NewSchedule> {
        let cell = |index: usize| record.get(index).unwrap_or("");
        let invalid = |column: &'static str, value: &str| ScheduleFormError::UploadInvalidValue {
            row,
            column,
            value: value.to_string(),
        };

        let int = |index: usize, column: &'static str| {
            let value = cell(index);
            value.parse::<i32>().map_err(|_| invalid(column, value))
        };
        let time = |index: usize, column: &'static str| -> ScheduleFormResult<NaiveTime> {
            let value = cell(index);
            parse_clock_time(value).ok_or_else(|| invalid(column, value))
        };
        let date = |index: usize, column: &'static str| -> ScheduleFormResult<NaiveDate> {
            let value = cell(index);
            value
                .parse::<NaiveDate>()
                .map_err(|_| invalid(column, value))
        };

        NewSchedule::new(
            int(self.associate_id, "associate_id")?,
            int(self.location_id, "location_id")?,
            int(self.day_of_week, "day_of_week")?,
            (
                time(self.start_time, "start_time")?,
                time(self.end_time, "end_time")?,
            ),
            (
                date(self.effective_on, "effective_on")?,
                date(self.expires_on, "expires_on")?,
            ),
        )
        .map_err(|source| ScheduleFormError::UploadInvalidSchedule { row, source })
    }
}

fn time_field(value: &str) -> ScheduleFormResult<NaiveTime> {
    parse_clock_time(value).ok_or_else(|| ScheduleFormError::InvalidTime(value.to_string()))
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

    fn schedule_form(start: &str, end: &str) -> AddScheduleForm {
        AddScheduleForm {
            associate_id: 1,
            location_id: 2,
            day_of_week: 0,
            start_time: start.to_string(),
            end_time: end.to_string(),
            effective_on: date(2024, 10, 1),
            expires_on: date(2025, 3, 1),
        }
    }

    #[test]
    fn add_schedule_form_builds_schedule() {
        let schedule = schedule_form("06:00", "11:00")
            .into_new_schedule()
            .expect("expected success");

        assert_eq!(schedule.start_time, time(6, 0));
        assert_eq!(schedule.end_time, time(11, 0));
        assert_eq!(schedule.effective_on, date(2024, 10, 1));
    }

    #[test]
    fn add_schedule_form_rejects_inverted_window() {
        let result = schedule_form("11:00", "06:00").into_new_schedule();

        assert!(matches!(
            result,
            Err(ScheduleFormError::Schedule(ScheduleError::EmptyWindow { .. }))
        ));
    }

    #[test]
    fn add_schedule_form_rejects_bad_day_and_time() {
        let mut form = schedule_form("06:00", "11:00");
        form.day_of_week = 7;
        assert!(matches!(
            form.into_new_schedule(),
            Err(ScheduleFormError::Validation(_))
        ));

        assert!(matches!(
            schedule_form("six", "11:00").into_new_schedule(),
            Err(ScheduleFormError::InvalidTime(_))
        ));
    }

    #[test]
    fn upload_parses_rows_in_any_column_order() {
        let csv = "Location_ID,associate_id,day_of_week,start_time,end_time,effective_on,expires_on\n\
                   2,1,0,06:00,11:00,2024-10-01,2025-03-01\n\
                   ,,,,,,\n\
                   2,1,3,13:00:00,17:30,2024-10-01,2025-03-01\n";

        let schedules = UploadSchedulesForm::new(csv.as_bytes().to_vec())
            .into_new_schedules()
            .expect("expected success");

        assert_eq!(schedules.len(), 2);
        assert_eq!(schedules[0].associate_id, 1);
        assert_eq!(schedules[0].location_id, 2);
        assert_eq!(schedules[1].day_of_week, 3);
        assert_eq!(schedules[1].end_time, time(17, 30));
    }

    #[test]
    fn upload_reports_row_of_invalid_schedule() {
        let csv = "associate_id,location_id,day_of_week,start_time,end_time,effective_on,expires_on\n\
                   1,2,0,06:00,11:00,2024-10-01,2025-03-01\n\
                   1,2,0,06:00,11:00,2025-04-01,2025-03-01\n";

        let result = UploadSchedulesForm::new(csv.as_bytes().to_vec()).into_new_schedules();

        assert!(matches!(
            result,
            Err(ScheduleFormError::UploadInvalidSchedule { row: 3, .. })
        ));
    }

    #[test]
    fn upload_requires_every_header() {
        let csv = "associate_id,location_id,day_of_week,start_time,end_time,effective_on\n";

        let result = UploadSchedulesForm::new(csv.as_bytes().to_vec()).into_new_schedules();

        assert!(matches!(
            result,
            Err(ScheduleFormError::MissingHeader("expires_on"))
        ));
    }

    #[test]
    fn upload_without_rows_is_rejected() {
        let csv = "associate_id,location_id,day_of_week,start_time,end_time,effective_on,expires_on\n";

        let result = UploadSchedulesForm::new(csv.as_bytes().to_vec()).into_new_schedules();

        assert!(matches!(result, Err(ScheduleFormError::EmptyUpload)));
    }

    #[test]
    fn supersede_form_keeps_associate_and_location() {
        let current = Schedule {
            id: 9,
            associate_id: 1,
            location_id: 2,
            start_time: time(6, 0),
            end_time: time(11, 0),
            day_of_week: 0,
            effective_on: date(2024, 10, 1),
            expires_on: date(2025, 3, 1),
            created_at: date(2024, 9, 1).and_time(time(0, 0)),
        };
        let form = SupersedeScheduleForm {
            day_of_week: 0,
            start_time: "08:00".to_string(),
            end_time: "12:00".to_string(),
            effective_on: date(2025, 1, 1),
            expires_on: date(2025, 6, 1),
        };

        let replacement = form.into_replacement(&current).expect("expected success");

        assert_eq!(replacement.associate_id, 1);
        assert_eq!(replacement.location_id, 2);
        assert_eq!(replacement.start_time, time(8, 0));
    }
}
