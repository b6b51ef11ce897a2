use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::{
    domain::object_id::ObjectId,
    domain::product::{
        NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery,
        ProductUpdate as DomainProductUpdate,
    },
    models::product::{NewProduct as DbNewProduct, Product as DbProduct, ProductChangeset},
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, ProductReader, ProductWriter},
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id.to_hex()))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        product.map(DomainProduct::try_from).transpose()
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut count_query = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            count_query = count_query.filter(products::name.like(pattern));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            items = items.filter(products::name.like(pattern));
        }

        items = items.order(products::created_at.desc());

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;

        let mut domain_products = Vec::with_capacity(db_products.len());
        for db_product in db_products {
            domain_products.push(db_product.try_into()?);
        }

        Ok((total, domain_products))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let id = ObjectId::generate();
        let id_hex = id.to_hex();
        let now = chrono::Local::now().naive_utc();
        let image_urls = serde_json::to_string(&new_product.image_urls)
            .map_err(|err| RepositoryError::Malformed(err.to_string()))?;

        let db_new = DbNewProduct {
            id: &id_hex,
            name: &new_product.name,
            image_urls: &image_urls,
            created_at: now,
            last_modified_at: now,
        };

        let created = diesel::insert_into(products::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        created.try_into()
    }

    fn update_product(
        &self,
        product_id: &ObjectId,
        updates: &DomainProductUpdate,
        last_modified_at: NaiveDateTime,
    ) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changes = ProductChangeset::from_update(updates, last_modified_at);

        let target = products::table.filter(products::id.eq(product_id.to_hex()));

        let updated = diesel::update(target).set(&changes).execute(&mut conn)?;
        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
