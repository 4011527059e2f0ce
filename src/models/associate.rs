use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::associate::{
    Associate as DomainAssociate, NewAssociate as DomainNewAssociate,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::associates)]
#[diesel(belongs_to(super::business::Business, foreign_key = business_id))]
pub struct Associate {
    pub id: i32,
    pub business_id: i32,
    pub calendar_id: String,
    pub timezone: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::associates)]
pub struct NewAssociate<'a> {
    pub business_id: i32,
    pub calendar_id: &'a str,
    pub timezone: &'a str,
}

impl From<Associate> for DomainAssociate {
    fn from(value: Associate) -> Self {
        Self {
            id: value.id,
            business_id: value.business_id,
            calendar_id: value.calendar_id,
            timezone: value.timezone,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewAssociate> for NewAssociate<'a> {
    fn from(value: &'a DomainNewAssociate) -> Self {
        Self {
            business_id: value.business_id,
            calendar_id: value.calendar_id.as_str(),
            timezone: value.timezone.as_str(),
        }
    }
}
