use diesel::prelude::*;

#[derive(Insertable)]
#[diesel(table_name = crate::schema::associate_product_links)]
pub struct NewAssociateProductLink {
    pub associate_id: i32,
    pub product_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::location_product_links)]
pub struct NewLocationProductLink {
    pub location_id: i32,
    pub product_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::photo_product_links)]
pub struct NewPhotoProductLink {
    pub photo_id: i32,
    pub product_id: i32,
}
