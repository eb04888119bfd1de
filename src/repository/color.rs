use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::audit::Auditable;
use crate::domain::color::Color as DomainColor;
use crate::models::color::{Color as DbColor, NewColor as DbNewColor, UpdateColor as DbUpdateColor};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::unit_of_work::{Entity, Findable};
use crate::repository::{ColorReader, DieselRepository};

impl Entity for DomainColor {
    fn as_auditable_mut(&mut self) -> Option<&mut dyn Auditable> {
        Some(self)
    }

    fn insert(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::colors;

        let insertable = DbNewColor::from(&*self);
        let created = diesel::insert_into(colors::table)
            .values(&insertable)
            .get_result::<DbColor>(conn)?;

        *self = created.into();
        Ok(())
    }

    fn update(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<bool> {
        use crate::schema::colors;

        let db_updates = DbUpdateColor::from(&*self);
        let updated = diesel::update(colors::table.find(self.id))
            .set(&db_updates)
            .get_result::<DbColor>(conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        *self = updated.into();
        Ok(true)
    }

    fn delete(&self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::colors;

        let deleted = diesel::delete(colors::table.find(self.id)).execute(conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

impl Findable for DomainColor {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }

    fn find(conn: &mut SqliteConnection, key: &i32) -> RepositoryResult<Option<Self>> {
        use crate::schema::colors;

        let row = colors::table.find(*key).first::<DbColor>(conn).optional()?;

        Ok(row.map(DomainColor::from))
    }
}

impl ColorReader for DieselRepository {
    fn get_color_by_id(&self, id: i32) -> RepositoryResult<Option<DomainColor>> {
        let mut conn = self.conn()?;
        DomainColor::find(&mut conn, &id)
    }

    fn list_colors(&self) -> RepositoryResult<Vec<DomainColor>> {
        use crate::schema::colors;

        let mut conn = self.conn()?;
        let rows = colors::table
            .order((colors::name.asc(), colors::id.asc()))
            .load::<DbColor>(&mut conn)?;

        Ok(rows.into_iter().map(DomainColor::from).collect())
    }
}
