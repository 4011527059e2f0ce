use diesel::prelude::*;

use crate::{
    domain::location::{Location as DomainLocation, NewLocation as DomainNewLocation},
    models::location::{Location as DbLocation, NewLocation as DbNewLocation},
    repository::{DieselRepository, LocationReader, LocationWriter, RepositoryResult},
};

impl LocationReader for DieselRepository {
    fn get_location_by_id(
        &self,
        id: i32,
        business_id: i32,
    ) -> RepositoryResult<Option<DomainLocation>> {
        use crate::schema::locations;

        let mut conn = self.conn()?;
        let location = locations::table
            .filter(locations::id.eq(id))
            .filter(locations::business_id.eq(business_id))
            .first::<DbLocation>(&mut conn)
            .optional()?;

        Ok(location.map(Into::into))
    }

    fn list_locations(&self, business_id: i32) -> RepositoryResult<Vec<DomainLocation>> {
        use crate::schema::locations;

        let mut conn = self.conn()?;
        let items = locations::table
            .filter(locations::business_id.eq(business_id))
            .order(locations::id.asc())
            .load::<DbLocation>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    fn list_locations_for_product(
        &self,
        product_id: i32,
        business_id: i32,
    ) -> RepositoryResult<Vec<DomainLocation>> {
        use crate::schema::{location_product_links, locations};

        let mut conn = self.conn()?;
        let items = locations::table
            .inner_join(
                location_product_links::table
                    .on(location_product_links::location_id.eq(locations::id)),
            )
            .filter(location_product_links::product_id.eq(product_id))
            .filter(locations::business_id.eq(business_id))
            .order(locations::id.asc())
            .select(DbLocation::as_select())
            .load::<DbLocation>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl LocationWriter for DieselRepository {
    fn create_location(&self, new_location: &DomainNewLocation) -> RepositoryResult<DomainLocation> {
        use crate::schema::locations;

        let mut conn = self.conn()?;
        let db_new = DbNewLocation::from(new_location);

        let created = diesel::insert_into(locations::table)
            .values(&db_new)
            .get_result::<DbLocation>(&mut conn)?;

        Ok(created.into())
    }
}
