use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::audit::Auditable;
use crate::domain::size::Size as DomainSize;
use crate::models::size::{Size as DbSize, NewSize as DbNewSize, UpdateSize as DbUpdateSize};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::unit_of_work::{Entity, Findable};
use crate::repository::{DieselRepository, SizeReader};

impl Entity for DomainSize {
    fn as_auditable_mut(&mut self) -> Option<&mut dyn Auditable> {
        Some(self)
    }

    fn insert(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::sizes;

        let insertable = DbNewSize::from(&*self);
        let created = diesel::insert_into(sizes::table)
            .values(&insertable)
            .get_result::<DbSize>(conn)?;

        *self = created.into();
        Ok(())
    }

    fn update(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<bool> {
        use crate::schema::sizes;

        let db_updates = DbUpdateSize::from(&*self);
        let updated = diesel::update(sizes::table.find(self.id))
            .set(&db_updates)
            .get_result::<DbSize>(conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        *self = updated.into();
        Ok(true)
    }

    fn delete(&self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::sizes;

        let deleted = diesel::delete(sizes::table.find(self.id)).execute(conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

impl Findable for DomainSize {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }

    fn find(conn: &mut SqliteConnection, key: &i32) -> RepositoryResult<Option<Self>> {
        use crate::schema::sizes;

        let row = sizes::table.find(*key).first::<DbSize>(conn).optional()?;

        Ok(row.map(DomainSize::from))
    }
}

impl SizeReader for DieselRepository {
    fn get_size_by_id(&self, id: i32) -> RepositoryResult<Option<DomainSize>> {
        let mut conn = self.conn()?;
        DomainSize::find(&mut conn, &id)
    }

    fn list_sizes(&self) -> RepositoryResult<Vec<DomainSize>> {
        use crate::schema::sizes;

        let mut conn = self.conn()?;
        let rows = sizes::table
            .order(sizes::id.asc())
            .load::<DbSize>(&mut conn)?;

        Ok(rows.into_iter().map(DomainSize::from).collect())
    }
}
