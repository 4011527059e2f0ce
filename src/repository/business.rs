use diesel::prelude::*;

use crate::{
    domain::business::{Business as DomainBusiness, NewBusiness as DomainNewBusiness},
    models::business::{Business as DbBusiness, NewBusiness as DbNewBusiness},
    repository::{BusinessReader, BusinessWriter, DieselRepository, RepositoryResult},
};

impl BusinessReader for DieselRepository {
    fn get_business_by_id(&self, id: i32) -> RepositoryResult<Option<DomainBusiness>> {
        use crate::schema::businesses;

        let mut conn = self.conn()?;
        let business = businesses::table
            .filter(businesses::id.eq(id))
            .first::<DbBusiness>(&mut conn)
            .optional()?;

        Ok(business.map(Into::into))
    }

    fn list_businesses(&self) -> RepositoryResult<Vec<DomainBusiness>> {
        use crate::schema::businesses;

        let mut conn = self.conn()?;
        let items = businesses::table
            .order(businesses::name.asc())
            .load::<DbBusiness>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl BusinessWriter for DieselRepository {
    fn create_business(&self, new_business: &DomainNewBusiness) -> RepositoryResult<DomainBusiness> {
        use crate::schema::businesses;

        let mut conn = self.conn()?;
        let db_new = DbNewBusiness::from(new_business);

        let created = diesel::insert_into(businesses::table)
            .values(&db_new)
            .get_result::<DbBusiness>(&mut conn)?;

        Ok(created.into())
    }
}
