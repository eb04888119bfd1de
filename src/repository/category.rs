use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::audit::Auditable;
use crate::domain::category::Category as DomainCategory;
use crate::domain::product::Product as DomainProduct;
use crate::models::category::{
    Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
};
use crate::models::product::Product as DbProduct;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::unit_of_work::{Entity, Findable};
use crate::repository::{CategoryReader, DieselRepository};

impl Entity for DomainCategory {
    fn as_auditable_mut(&mut self) -> Option<&mut dyn Auditable> {
        Some(self)
    }

    fn insert(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::categories;

        let insertable = DbNewCategory::from(&*self);
        let created = diesel::insert_into(categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(conn)?;

        *self = created.into();
        Ok(())
    }

    fn update(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<bool> {
        use crate::schema::categories;

        let db_updates = DbUpdateCategory::from(&*self);
        let updated = diesel::update(categories::table.find(self.id))
            .set(&db_updates)
            .get_result::<DbCategory>(conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        *self = updated.into();
        Ok(true)
    }

    fn delete(&self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::categories;

        let deleted = diesel::delete(categories::table.find(self.id)).execute(conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

impl Findable for DomainCategory {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }

    fn find(conn: &mut SqliteConnection, key: &i32) -> RepositoryResult<Option<Self>> {
        use crate::schema::categories;

        let category = categories::table
            .find(*key)
            .first::<DbCategory>(conn)
            .optional()?;

        Ok(category.map(DomainCategory::from))
    }
}

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCategory>> {
        let mut conn = self.conn()?;
        DomainCategory::find(&mut conn, &id)
    }

    fn list_categories(&self) -> RepositoryResult<Vec<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let categories = categories::table
            .order(categories::name.asc())
            .load::<DbCategory>(&mut conn)?;

        Ok(categories.into_iter().map(DomainCategory::from).collect())
    }

    fn list_products_in_category(&self, category_id: i32) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::{category_products, products};

        let mut conn = self.conn()?;
        let products = category_products::table
            .inner_join(products::table)
            .filter(category_products::category_id.eq(category_id))
            .order(products::name.asc())
            .select(DbProduct::as_select())
            .load::<DbProduct>(&mut conn)?;

        Ok(products.into_iter().map(DomainProduct::from).collect())
    }
}
