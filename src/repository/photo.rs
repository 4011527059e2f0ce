use diesel::prelude::*;

use crate::{
    domain::photo::{NewPhoto as DomainNewPhoto, Photo as DomainPhoto},
    models::photo::{NewPhoto as DbNewPhoto, Photo as DbPhoto},
    repository::{DieselRepository, PhotoReader, PhotoWriter, RepositoryResult},
};

impl PhotoReader for DieselRepository {
    fn list_photos_for_product(
        &self,
        product_id: i32,
        business_id: i32,
    ) -> RepositoryResult<Vec<DomainPhoto>> {
        use crate::schema::{photo_product_links, photos};

        let mut conn = self.conn()?;
        let items = photos::table
            .inner_join(photo_product_links::table.on(photo_product_links::photo_id.eq(photos::id)))
            .filter(photo_product_links::product_id.eq(product_id))
            .filter(photos::business_id.eq(business_id))
            .order(photos::id.asc())
            .select(DbPhoto::as_select())
            .load::<DbPhoto>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl PhotoWriter for DieselRepository {
    fn create_photo(&self, new_photo: &DomainNewPhoto) -> RepositoryResult<DomainPhoto> {
        use crate::schema::photos;

        let mut conn = self.conn()?;
        let db_new = DbNewPhoto::from(new_photo);

        let created = diesel::insert_into(photos::table)
            .values(&db_new)
            .get_result::<DbPhoto>(&mut conn)?;

        Ok(created.into())
    }
}
