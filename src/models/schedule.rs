use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use crate::domain::schedule::{NewSchedule as DomainNewSchedule, Schedule as DomainSchedule};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(
    table_name = crate::schema::schedules,
    belongs_to(super::associate::Associate, foreign_key = associate_id),
    belongs_to(super::location::Location, foreign_key = location_id)
)]
pub struct Schedule {
    pub id: i32,
    pub associate_id: i32,
    pub location_id: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub day_of_week: i32,
    pub effective_on: NaiveDate,
    pub expires_on: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::schedules)]
pub struct NewSchedule {
    pub associate_id: i32,
    pub location_id: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub day_of_week: i32,
    pub effective_on: NaiveDate,
    pub expires_on: NaiveDate,
}

impl From<Schedule> for DomainSchedule {
    fn from(value: Schedule) -> Self {
        Self {
            id: value.id,
            associate_id: value.associate_id,
            location_id: value.location_id,
            start_time: value.start_time,
            end_time: value.end_time,
            day_of_week: value.day_of_week,
            effective_on: value.effective_on,
            expires_on: value.expires_on,
            created_at: value.created_at,
        }
    }
}

impl From<&DomainNewSchedule> for NewSchedule {
    fn from(value: &DomainNewSchedule) -> Self {
        Self {
            associate_id: value.associate_id,
            location_id: value.location_id,
            start_time: value.start_time,
            end_time: value.end_time,
            day_of_week: value.day_of_week,
            effective_on: value.effective_on,
            expires_on: value.expires_on,
        }
    }
}
