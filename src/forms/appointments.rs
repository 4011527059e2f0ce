use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::appointment::{AppointmentError, NewAppointment};
use crate::forms::parse_clock_time;

/// Errors that can occur while processing appointment forms.
#[derive(Debug, Error)]
pub enum AppointmentFormError {
    #[error("invalid time `{0}`, expected HH:MM")]
    InvalidTime(String),
    #[error(transparent)]
    Appointment(#[from] AppointmentError),
}

/// JSON payload recording a booked interval in the associate's local time.
#[derive(Debug, Deserialize)]
pub struct AddAppointmentForm {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}

impl AddAppointmentForm {
    pub fn into_new_appointment(
        self,
        associate_id: i32,
    ) -> Result<NewAppointment, AppointmentFormError> {
        let start = parse_clock_time(&self.start_time)
            .ok_or_else(|| AppointmentFormError::InvalidTime(self.start_time.clone()))?;
        let end = parse_clock_time(&self.end_time)
            .ok_or_else(|| AppointmentFormError::InvalidTime(self.end_time.clone()))?;

        Ok(NewAppointment::new(associate_id, self.date, start, end)?)
    }
}
