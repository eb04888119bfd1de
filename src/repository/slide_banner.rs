use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::audit::Auditable;
use crate::domain::slide_banner::SlideBanner as DomainSlideBanner;
use crate::models::slide_banner::{
    NewSlideBanner as DbNewSlideBanner, SlideBanner as DbSlideBanner,
    UpdateSlideBanner as DbUpdateSlideBanner,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::unit_of_work::{Entity, Findable};
use crate::repository::{DieselRepository, SlideBannerReader};

impl Entity for DomainSlideBanner {
    fn as_auditable_mut(&mut self) -> Option<&mut dyn Auditable> {
        Some(self)
    }

    fn insert(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::slide_banners;

        let insertable = DbNewSlideBanner::from(&*self);
        let created = diesel::insert_into(slide_banners::table)
            .values(&insertable)
            .get_result::<DbSlideBanner>(conn)?;

        *self = created.into();
        Ok(())
    }

    fn update(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<bool> {
        use crate::schema::slide_banners;

        let db_updates = DbUpdateSlideBanner::from(&*self);
        let updated = diesel::update(slide_banners::table.find(self.id))
            .set(&db_updates)
            .get_result::<DbSlideBanner>(conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        *self = updated.into();
        Ok(true)
    }

    fn delete(&self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::slide_banners;

        let deleted = diesel::delete(slide_banners::table.find(self.id)).execute(conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

impl Findable for DomainSlideBanner {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }

    fn find(conn: &mut SqliteConnection, key: &i32) -> RepositoryResult<Option<Self>> {
        use crate::schema::slide_banners;

        let banner = slide_banners::table
            .find(*key)
            .first::<DbSlideBanner>(conn)
            .optional()?;

        Ok(banner.map(DomainSlideBanner::from))
    }
}

impl SlideBannerReader for DieselRepository {
    fn get_slide_banner_by_id(&self, id: i32) -> RepositoryResult<Option<DomainSlideBanner>> {
        let mut conn = self.conn()?;
        DomainSlideBanner::find(&mut conn, &id)
    }

    fn list_slide_banners(&self) -> RepositoryResult<Vec<DomainSlideBanner>> {
        use crate::schema::slide_banners;

        let mut conn = self.conn()?;
        let banners = slide_banners::table
            .order((slide_banners::position.asc(), slide_banners::id.asc()))
            .load::<DbSlideBanner>(&mut conn)?;

        Ok(banners.into_iter().map(DomainSlideBanner::from).collect())
    }
}
