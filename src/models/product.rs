use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::products)]
#[diesel(belongs_to(super::business::Business, foreign_key = business_id))]
pub struct Product {
    pub id: i32,
    pub business_id: i32,
    pub duration_minutes: i32,
    pub description: String,
    pub booking_fee_cents: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub business_id: i32,
    pub duration_minutes: i32,
    pub description: &'a str,
    pub booking_fee_cents: i64,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            business_id: value.business_id,
            duration_minutes: value.duration_minutes,
            description: value.description,
            booking_fee_cents: value.booking_fee_cents,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            business_id: value.business_id,
            duration_minutes: value.duration_minutes,
            description: value.description.as_str(),
            booking_fee_cents: value.booking_fee_cents,
        }
    }
}
