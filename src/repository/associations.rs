//! Join rows linking products to categories, colors and sizes.
//!
//! Each row is identified by its foreign-key pair. The composite primary key
//! rejects duplicate pairs and both foreign keys cascade on delete.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::Category as DomainCategory;
use crate::domain::category_product::CategoryProduct as DomainCategoryProduct;
use crate::domain::color::Color as DomainColor;
use crate::domain::product_color::ProductColor as DomainProductColor;
use crate::domain::product_size::ProductSize as DomainProductSize;
use crate::domain::size::Size as DomainSize;
use crate::models::category_product::CategoryProduct as DbCategoryProduct;
use crate::models::product_color::ProductColor as DbProductColor;
use crate::models::product_size::ProductSize as DbProductSize;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::unit_of_work::{Association, Entity, Findable};
use crate::repository::{AssociationReader, DieselRepository};

impl Entity for DomainCategoryProduct {
    fn insert(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::category_products;

        diesel::insert_into(category_products::table)
            .values(&DbCategoryProduct::from(&*self))
            .execute(conn)?;
        Ok(())
    }

    // Key-only row: nothing to update.
    fn update(&mut self, _conn: &mut SqliteConnection) -> RepositoryResult<bool> {
        Ok(false)
    }

    fn delete(&self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::category_products;

        let deleted =
            diesel::delete(category_products::table.find((self.product_id, self.category_id)))
                .execute(conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

impl Findable for DomainCategoryProduct {
    /// `(product_id, category_id)`
    type Key = (i32, i32);

    fn key(&self) -> (i32, i32) {
        (self.product_id, self.category_id)
    }

    fn find(conn: &mut SqliteConnection, key: &(i32, i32)) -> RepositoryResult<Option<Self>> {
        use crate::schema::category_products;

        let row = category_products::table
            .find(*key)
            .first::<DbCategoryProduct>(conn)
            .optional()?;

        Ok(row.map(DomainCategoryProduct::from))
    }
}

impl Entity for DomainProductColor {
    fn insert(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::product_colors;

        diesel::insert_into(product_colors::table)
            .values(&DbProductColor::from(&*self))
            .execute(conn)?;
        Ok(())
    }

    fn update(&mut self, _conn: &mut SqliteConnection) -> RepositoryResult<bool> {
        Ok(false)
    }

    fn delete(&self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::product_colors;

        let deleted = diesel::delete(product_colors::table.find((self.product_id, self.color_id)))
            .execute(conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

impl Findable for DomainProductColor {
    /// `(product_id, color_id)`
    type Key = (i32, i32);

    fn key(&self) -> (i32, i32) {
        (self.product_id, self.color_id)
    }

    fn find(conn: &mut SqliteConnection, key: &(i32, i32)) -> RepositoryResult<Option<Self>> {
        use crate::schema::product_colors;

        let row = product_colors::table
            .find(*key)
            .first::<DbProductColor>(conn)
            .optional()?;

        Ok(row.map(DomainProductColor::from))
    }
}

impl Entity for DomainProductSize {
    fn insert(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::product_sizes;

        diesel::insert_into(product_sizes::table)
            .values(&DbProductSize::from(&*self))
            .execute(conn)?;
        Ok(())
    }

    fn update(&mut self, _conn: &mut SqliteConnection) -> RepositoryResult<bool> {
        Ok(false)
    }

    fn delete(&self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::product_sizes;

        let deleted = diesel::delete(product_sizes::table.find((self.product_id, self.size_id)))
            .execute(conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

impl Findable for DomainProductSize {
    /// `(product_id, size_id)`
    type Key = (i32, i32);

    fn key(&self) -> (i32, i32) {
        (self.product_id, self.size_id)
    }

    fn find(conn: &mut SqliteConnection, key: &(i32, i32)) -> RepositoryResult<Option<Self>> {
        use crate::schema::product_sizes;

        let row = product_sizes::table
            .find(*key)
            .first::<DbProductSize>(conn)
            .optional()?;

        Ok(row.map(DomainProductSize::from))
    }
}

impl Association for DomainCategoryProduct {
    type Linked = DomainCategory;

    fn from_ids(product_id: i32, linked_id: i32) -> Self {
        Self::new(product_id, linked_id)
    }

    fn set_product_id(&mut self, id: i32) {
        self.product_id = id;
    }

    fn set_linked_id(&mut self, id: i32) {
        self.category_id = id;
    }
}

impl Association for DomainProductColor {
    type Linked = DomainColor;

    fn from_ids(product_id: i32, linked_id: i32) -> Self {
        Self::new(product_id, linked_id)
    }

    fn set_product_id(&mut self, id: i32) {
        self.product_id = id;
    }

    fn set_linked_id(&mut self, id: i32) {
        self.color_id = id;
    }
}

impl Association for DomainProductSize {
    type Linked = DomainSize;

    fn from_ids(product_id: i32, linked_id: i32) -> Self {
        Self::new(product_id, linked_id)
    }

    fn set_product_id(&mut self, id: i32) {
        self.product_id = id;
    }

    fn set_linked_id(&mut self, id: i32) {
        self.size_id = id;
    }
}

impl AssociationReader for DieselRepository {
    fn list_category_products(
        &self,
        product_id: i32,
    ) -> RepositoryResult<Vec<DomainCategoryProduct>> {
        use crate::schema::category_products;

        let mut conn = self.conn()?;
        let rows = category_products::table
            .filter(category_products::product_id.eq(product_id))
            .order(category_products::category_id.asc())
            .load::<DbCategoryProduct>(&mut conn)?;

        Ok(rows.into_iter().map(DomainCategoryProduct::from).collect())
    }

    fn list_product_colors(&self, product_id: i32) -> RepositoryResult<Vec<DomainProductColor>> {
        use crate::schema::product_colors;

        let mut conn = self.conn()?;
        let rows = product_colors::table
            .filter(product_colors::product_id.eq(product_id))
            .order(product_colors::color_id.asc())
            .load::<DbProductColor>(&mut conn)?;

        Ok(rows.into_iter().map(DomainProductColor::from).collect())
    }

    fn list_product_sizes(&self, product_id: i32) -> RepositoryResult<Vec<DomainProductSize>> {
        use crate::schema::product_sizes;

        let mut conn = self.conn()?;
        let rows = product_sizes::table
            .filter(product_sizes::product_id.eq(product_id))
            .order(product_sizes::size_id.asc())
            .load::<DbProductSize>(&mut conn)?;

        Ok(rows.into_iter().map(DomainProductSize::from).collect())
    }
}
