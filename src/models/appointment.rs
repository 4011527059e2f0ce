use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use crate::domain::appointment::{
    Appointment as DomainAppointment, NewAppointment as DomainNewAppointment,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::appointments)]
#[diesel(belongs_to(super::associate::Associate, foreign_key = associate_id))]
pub struct Appointment {
    pub id: i32,
    pub associate_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::appointments)]
pub struct NewAppointment {
    pub associate_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl From<Appointment> for DomainAppointment {
    fn from(value: Appointment) -> Self {
        Self {
            id: value.id,
            associate_id: value.associate_id,
            date: value.date,
            start_time: value.start_time,
            end_time: value.end_time,
            created_at: value.created_at,
        }
    }
}

impl From<&DomainNewAppointment> for NewAppointment {
    fn from(value: &DomainNewAppointment) -> Self {
        Self {
            associate_id: value.associate_id,
            date: value.date,
            start_time: value.start_time,
            end_time: value.end_time,
        }
    }
}
