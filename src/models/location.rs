use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::location::{Location as DomainLocation, NewLocation as DomainNewLocation};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::locations)]
#[diesel(belongs_to(super::business::Business, foreign_key = business_id))]
pub struct Location {
    pub id: i32,
    pub business_id: i32,
    pub description: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::locations)]
pub struct NewLocation<'a> {
    pub business_id: i32,
    pub description: &'a str,
}

impl From<Location> for DomainLocation {
    fn from(value: Location) -> Self {
        Self {
            id: value.id,
            business_id: value.business_id,
            description: value.description,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewLocation> for NewLocation<'a> {
    fn from(value: &'a DomainNewLocation) -> Self {
        Self {
            business_id: value.business_id,
            description: value.description.as_str(),
        }
    }
}
