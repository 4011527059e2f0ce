use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::product_link::{NewProductLink, ProductLinkTarget},
    models::product_link::{NewAssociateProductLink, NewLocationProductLink, NewPhotoProductLink},
    repository::{
        DieselRepository, ProductLinkReader, ProductLinkWriter, RepositoryError, RepositoryResult,
    },
};

impl ProductLinkReader for DieselRepository {
    fn list_associate_ids_for_product(&self, product_id: i32) -> RepositoryResult<Vec<i32>> {
        use crate::schema::associate_product_links;

        let mut conn = self.conn()?;
        let ids = associate_product_links::table
            .filter(associate_product_links::product_id.eq(product_id))
            .select(associate_product_links::associate_id)
            .order(associate_product_links::associate_id.asc())
            .load::<i32>(&mut conn)?;

        Ok(ids)
    }

    fn list_location_ids_for_product(&self, product_id: i32) -> RepositoryResult<Vec<i32>> {
        use crate::schema::location_product_links;

        let mut conn = self.conn()?;
        let ids = location_product_links::table
            .filter(location_product_links::product_id.eq(product_id))
            .select(location_product_links::location_id)
            .order(location_product_links::location_id.asc())
            .load::<i32>(&mut conn)?;

        Ok(ids)
    }
}

impl ProductLinkWriter for DieselRepository {
    fn link_product(&self, link: &NewProductLink) -> RepositoryResult<()> {
        use crate::schema::{
            associate_product_links, location_product_links, photo_product_links, products,
        };

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let product_business = products::table
                .filter(products::id.eq(link.product_id))
                .select(products::business_id)
                .first::<i32>(conn)?;

            let target_business = target_business_id(conn, link.target)?
                .ok_or(RepositoryError::MissingReference)?;

            if target_business != product_business {
                return Err(RepositoryError::ValidationError(format!(
                    "{} belongs to another business than product {}",
                    describe(link.target),
                    link.product_id
                )));
            }

            match link.target {
                ProductLinkTarget::Associate(associate_id) => {
                    diesel::insert_into(associate_product_links::table)
                        .values(&NewAssociateProductLink {
                            associate_id,
                            product_id: link.product_id,
                        })
                        .execute(conn)?;
                }
                ProductLinkTarget::Location(location_id) => {
                    diesel::insert_into(location_product_links::table)
                        .values(&NewLocationProductLink {
                            location_id,
                            product_id: link.product_id,
                        })
                        .execute(conn)?;
                }
                ProductLinkTarget::Photo(photo_id) => {
                    diesel::insert_into(photo_product_links::table)
                        .values(&NewPhotoProductLink {
                            photo_id,
                            product_id: link.product_id,
                        })
                        .execute(conn)?;
                }
            }

            Ok(())
        })
    }
}

fn target_business_id(
    conn: &mut SqliteConnection,
    target: ProductLinkTarget,
) -> RepositoryResult<Option<i32>> {
    use crate::schema::{associates, locations, photos};

    let business_id = match target {
        ProductLinkTarget::Associate(id) => associates::table
            .filter(associates::id.eq(id))
            .select(associates::business_id)
            .first::<i32>(conn)
            .optional()?,
        ProductLinkTarget::Location(id) => locations::table
            .filter(locations::id.eq(id))
            .select(locations::business_id)
            .first::<i32>(conn)
            .optional()?,
        ProductLinkTarget::Photo(id) => photos::table
            .filter(photos::id.eq(id))
            .select(photos::business_id)
            .first::<i32>(conn)
            .optional()?,
    };

    Ok(business_id)
}

fn describe(target: ProductLinkTarget) -> String {
    match target {
        ProductLinkTarget::Associate(id) => format!("associate {id}"),
        ProductLinkTarget::Location(id) => format!("location {id}"),
        ProductLinkTarget::Photo(id) => format!("photo {id}"),
    }
}
