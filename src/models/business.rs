use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::business::{Business as DomainBusiness, NewBusiness as DomainNewBusiness};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::businesses)]
pub struct Business {
    pub id: i32,
    pub name: String,
    pub calendar_service: String,
    pub calendar_service_id: String,
    pub knowledge_base_ref: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::businesses)]
pub struct NewBusiness<'a> {
    pub name: &'a str,
    pub calendar_service: &'a str,
    pub calendar_service_id: &'a str,
    pub knowledge_base_ref: Option<&'a str>,
}

impl From<Business> for DomainBusiness {
    fn from(value: Business) -> Self {
        Self {
            id: value.id,
            name: value.name,
            calendar_service: value.calendar_service,
            calendar_service_id: value.calendar_service_id,
            knowledge_base_ref: value.knowledge_base_ref,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewBusiness> for NewBusiness<'a> {
    fn from(value: &'a DomainNewBusiness) -> Self {
        Self {
            name: value.name.as_str(),
            calendar_service: value.calendar_service.as_str(),
            calendar_service_id: value.calendar_service_id.as_str(),
            knowledge_base_ref: value.knowledge_base_ref.as_deref(),
        }
    }
}
