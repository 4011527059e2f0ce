use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::photo::{NewPhoto as DomainNewPhoto, Photo as DomainPhoto};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::photos)]
#[diesel(belongs_to(super::business::Business, foreign_key = business_id))]
pub struct Photo {
    pub id: i32,
    pub business_id: i32,
    pub file_ref: String,
    pub description: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::photos)]
pub struct NewPhoto<'a> {
    pub business_id: i32,
    pub file_ref: &'a str,
    pub description: &'a str,
}

impl From<Photo> for DomainPhoto {
    fn from(value: Photo) -> Self {
        Self {
            id: value.id,
            business_id: value.business_id,
            file_ref: value.file_ref,
            description: value.description,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewPhoto> for NewPhoto<'a> {
    fn from(value: &'a DomainNewPhoto) -> Self {
        Self {
            business_id: value.business_id,
            file_ref: value.file_ref.as_str(),
            description: value.description.as_str(),
        }
    }
}
