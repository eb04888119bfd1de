use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::audit::Auditable;
use crate::domain::category::Category as DomainCategory;
use crate::domain::color::Color as DomainColor;
use crate::domain::product::{Product as DomainProduct, ProductDetails, ProductListQuery};
use crate::domain::size::Size as DomainSize;
use crate::models::category::Category as DbCategory;
use crate::models::color::Color as DbColor;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::models::size::Size as DbSize;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::unit_of_work::{Entity, Findable};
use crate::repository::{DieselRepository, ProductReader};

impl Entity for DomainProduct {
    fn as_auditable_mut(&mut self) -> Option<&mut dyn Auditable> {
        Some(self)
    }

    fn insert(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::products;

        let insertable = DbNewProduct::from(&*self);
        let created = diesel::insert_into(products::table)
            .values(&insertable)
            .get_result::<DbProduct>(conn)?;

        *self = created.into();
        Ok(())
    }

    fn update(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<bool> {
        use crate::schema::products;

        let db_updates = DbUpdateProduct::from(&*self);
        let updated = diesel::update(products::table.find(self.id))
            .set(&db_updates)
            .get_result::<DbProduct>(conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        *self = updated.into();
        Ok(true)
    }

    fn delete(&self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::products;

        let deleted = diesel::delete(products::table.find(self.id)).execute(conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

impl Findable for DomainProduct {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }

    fn find(conn: &mut SqliteConnection, key: &i32) -> RepositoryResult<Option<Self>> {
        use crate::schema::products;

        let product = products::table
            .find(*key)
            .first::<DbProduct>(conn)
            .optional()?;

        Ok(product.map(DomainProduct::from))
    }
}

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        let mut conn = self.conn()?;
        DomainProduct::find(&mut conn, &id)
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(term) = query.search.as_ref() {
                let pattern = format!("%{}%", term);
                items = items.filter(
                    products::name
                        .like(pattern.clone())
                        .or(products::description.like(pattern)),
                );
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order((products::created_at.desc(), products::id.desc()));

        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;
        let products = db_products.into_iter().map(DomainProduct::from).collect();

        Ok((total, products))
    }

    fn get_product_details(&self, id: i32) -> RepositoryResult<Option<ProductDetails>> {
        use crate::schema::{
            categories, category_products, colors, product_colors, product_sizes, sizes,
        };

        let mut conn = self.conn()?;

        let Some(product) = DomainProduct::find(&mut conn, &id)? else {
            return Ok(None);
        };

        let db_categories = category_products::table
            .inner_join(categories::table)
            .filter(category_products::product_id.eq(id))
            .order(categories::name.asc())
            .select(DbCategory::as_select())
            .load::<DbCategory>(&mut conn)?;

        let db_colors = product_colors::table
            .inner_join(colors::table)
            .filter(product_colors::product_id.eq(id))
            .order(colors::name.asc())
            .select(DbColor::as_select())
            .load::<DbColor>(&mut conn)?;

        let db_sizes = product_sizes::table
            .inner_join(sizes::table)
            .filter(product_sizes::product_id.eq(id))
            .order(sizes::name.asc())
            .select(DbSize::as_select())
            .load::<DbSize>(&mut conn)?;

        Ok(Some(ProductDetails {
            product,
            categories: db_categories.into_iter().map(DomainCategory::from).collect(),
            colors: db_colors.into_iter().map(DomainColor::from).collect(),
            sizes: db_sizes.into_iter().map(DomainSize::from).collect(),
        }))
    }
}
