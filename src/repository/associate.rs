use diesel::prelude::*;

use crate::{
    domain::associate::{Associate as DomainAssociate, NewAssociate as DomainNewAssociate},
    models::associate::{Associate as DbAssociate, NewAssociate as DbNewAssociate},
    repository::{AssociateReader, AssociateWriter, DieselRepository, RepositoryResult},
};

impl AssociateReader for DieselRepository {
    fn get_associate_by_id(
        &self,
        id: i32,
        business_id: i32,
    ) -> RepositoryResult<Option<DomainAssociate>> {
        use crate::schema::associates;

        let mut conn = self.conn()?;
        let associate = associates::table
            .filter(associates::id.eq(id))
            .filter(associates::business_id.eq(business_id))
            .first::<DbAssociate>(&mut conn)
            .optional()?;

        Ok(associate.map(Into::into))
    }

    fn list_associates(&self, business_id: i32) -> RepositoryResult<Vec<DomainAssociate>> {
        use crate::schema::associates;

        let mut conn = self.conn()?;
        let items = associates::table
            .filter(associates::business_id.eq(business_id))
            .order(associates::id.asc())
            .load::<DbAssociate>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl AssociateWriter for DieselRepository {
    fn create_associate(
        &self,
        new_associate: &DomainNewAssociate,
    ) -> RepositoryResult<DomainAssociate> {
        use crate::schema::associates;

        let mut conn = self.conn()?;
        let db_new = DbNewAssociate::from(new_associate);

        let created = diesel::insert_into(associates::table)
            .values(&db_new)
            .get_result::<DbAssociate>(&mut conn)?;

        Ok(created.into())
    }
}
