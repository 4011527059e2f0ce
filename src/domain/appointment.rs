use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("appointment start {start} must be before its end {end}")]
pub struct AppointmentError {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// An interval already booked on an associate's calendar, in associate-local time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    pub id: i32,
    pub associate_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub created_at: NaiveDateTime,
}

impl Appointment {
    /// Local start and end of the booking.
    pub fn local_bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        (
            self.date.and_time(self.start_time),
            self.date.and_time(self.end_time),
        )
    }
}

/// Payload required to record a booked interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub associate_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl NewAppointment {
    pub fn new(
        associate_id: i32,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, AppointmentError> {
        let appointment = Self {
            associate_id,
            date,
            start_time,
            end_time,
        };
        appointment.validate()?;
        Ok(appointment)
    }

    pub fn validate(&self) -> Result<(), AppointmentError> {
        if self.start_time >= self.end_time {
            return Err(AppointmentError {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }
}
