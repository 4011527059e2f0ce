use crate::domain::appointment::Appointment;
use crate::forms::appointments::AddAppointmentForm;
use crate::repository::{AppointmentReader, AppointmentWriter, AssociateReader};
use crate::services::availability::AvailabilityQuery;
use crate::services::catalog::get_associate;
use crate::services::{ServiceError, ServiceResult};

/// Records a booked interval on an associate's calendar.
pub fn create_appointment<R>(
    repo: &R,
    business_id: i32,
    associate_id: i32,
    form: AddAppointmentForm,
) -> ServiceResult<Appointment>
where
    R: AssociateReader + AppointmentWriter + ?Sized,
{
    get_associate(repo, business_id, associate_id)?;
    let new_appointment = form
        .into_new_appointment(associate_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_appointment(&new_appointment)
        .map_err(ServiceError::from)
}

/// Lists the associate's appointments dated within the queried range.
pub fn list_appointments<R>(
    repo: &R,
    business_id: i32,
    associate_id: i32,
    query: AvailabilityQuery,
) -> ServiceResult<Vec<Appointment>>
where
    R: AssociateReader + AppointmentReader + ?Sized,
{
    let range = query.range()?;
    get_associate(repo, business_id, associate_id)?;

    repo.list_appointments(associate_id, range.from(), range.to())
        .map_err(ServiceError::from)
}
