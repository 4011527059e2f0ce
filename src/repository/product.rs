use diesel::prelude::*;

use crate::{
    domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery},
    models::product::{NewProduct as DbNewProduct, Product as DbProduct},
    repository::{
        DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult,
    },
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(
        &self,
        id: i32,
        business_id: i32,
    ) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .filter(products::business_id.eq(business_id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut count_query = products::table
            .filter(products::business_id.eq(query.business_id))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            count_query = count_query.filter(products::description.like(format!("%{term}%")));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = products::table
            .filter(products::business_id.eq(query.business_id))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            items = items.filter(products::description.like(format!("%{term}%")));
        }

        items = items.order(products::id.asc());

        if let Some(pagination) = &query.pagination {
            let offset = pagination.offset().ok_or_else(|| {
                RepositoryError::ValidationError(format!(
                    "page {} is out of range",
                    pagination.page
                ))
            })?;
            items = items.offset(offset).limit(pagination.limit());
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;

        Ok((total, db_products.into_iter().map(Into::into).collect()))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = diesel::insert_into(products::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }
}
