use std::collections::BTreeSet;

use crate::domain::schedule::{NewSchedule, Schedule, ScheduleListQuery};
use crate::forms::schedules::{AddScheduleForm, SupersedeScheduleForm, UploadSchedulesForm};
use crate::repository::{AssociateReader, LocationReader, ScheduleReader, ScheduleWriter};
use crate::services::catalog::get_associate;
use crate::services::{ServiceError, ServiceResult};

pub fn create_schedule<R>(
    repo: &R,
    business_id: i32,
    form: AddScheduleForm,
) -> ServiceResult<Schedule>
where
    R: AssociateReader + LocationReader + ScheduleWriter + ?Sized,
{
    let new_schedule = form
        .into_new_schedule()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_owned_by_business(repo, business_id, std::slice::from_ref(&new_schedule))?;

    repo.create_schedule(&new_schedule)
        .map_err(ServiceError::from)
}

/// Imports schedules from a CSV body. Either every row is stored or none.
pub fn import_schedules<R>(
    repo: &R,
    business_id: i32,
    form: UploadSchedulesForm,
) -> ServiceResult<usize>
where
    R: AssociateReader + LocationReader + ScheduleWriter + ?Sized,
{
    let new_schedules = form
        .into_new_schedules()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_owned_by_business(repo, business_id, &new_schedules)?;

    let created = repo
        .create_schedules(&new_schedules)
        .map_err(ServiceError::from)?;
    log::info!("Imported {created} schedules for business {business_id}");
    Ok(created)
}

/// Ends a schedule the day before its replacement takes effect.
pub fn supersede_schedule<R>(
    repo: &R,
    business_id: i32,
    schedule_id: i32,
    form: SupersedeScheduleForm,
) -> ServiceResult<Schedule>
where
    R: AssociateReader + ScheduleReader + ScheduleWriter + ?Sized,
{
    let current = repo
        .get_schedule_by_id(schedule_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;
    get_associate(repo, business_id, current.associate_id)?;

    let replacement = form
        .into_replacement(&current)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.supersede_schedule(schedule_id, &replacement)
        .map_err(ServiceError::from)
}

pub fn list_associate_schedules<R>(
    repo: &R,
    business_id: i32,
    associate_id: i32,
) -> ServiceResult<Vec<Schedule>>
where
    R: AssociateReader + ScheduleReader + ?Sized,
{
    get_associate(repo, business_id, associate_id)?;
    repo.list_schedules(ScheduleListQuery::for_associate(associate_id))
        .map_err(ServiceError::from)
}

/// Reject schedules naming an associate or a location outside `business_id`.
fn ensure_owned_by_business<R>(
    repo: &R,
    business_id: i32,
    schedules: &[NewSchedule],
) -> ServiceResult<()>
where
    R: AssociateReader + LocationReader + ?Sized,
{
    let associate_ids: BTreeSet<i32> = schedules.iter().map(|s| s.associate_id).collect();
    let location_ids: BTreeSet<i32> = schedules.iter().map(|s| s.location_id).collect();

    for associate_id in associate_ids {
        if repo
            .get_associate_by_id(associate_id, business_id)
            .map_err(ServiceError::from)?
            .is_none()
        {
            return Err(ServiceError::Form(format!(
                "associate {associate_id} does not belong to business {business_id}"
            )));
        }
    }

    for location_id in location_ids {
        if repo
            .get_location_by_id(location_id, business_id)
            .map_err(ServiceError::from)?
            .is_none()
        {
            return Err(ServiceError::Form(format!(
                "location {location_id} does not belong to business {business_id}"
            )));
        }
    }

    Ok(())
}
