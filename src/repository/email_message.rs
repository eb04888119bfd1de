use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::audit::Auditable;
use crate::domain::email_message::{EmailMessage as DomainEmailMessage, EmailMessageListQuery};
use crate::models::email_message::{
    EmailMessage as DbEmailMessage, NewEmailMessage as DbNewEmailMessage,
    UpdateEmailMessage as DbUpdateEmailMessage,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::unit_of_work::{Entity, Findable};
use crate::repository::{DieselRepository, EmailMessageReader};

impl Entity for DomainEmailMessage {
    fn as_auditable_mut(&mut self) -> Option<&mut dyn Auditable> {
        Some(self)
    }

    fn insert(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::email_messages;

        let insertable = DbNewEmailMessage::from(&*self);
        let created = diesel::insert_into(email_messages::table)
            .values(&insertable)
            .get_result::<DbEmailMessage>(conn)?;

        *self = created.into();
        Ok(())
    }

    fn update(&mut self, conn: &mut SqliteConnection) -> RepositoryResult<bool> {
        use crate::schema::email_messages;

        let db_updates = DbUpdateEmailMessage::from(&*self);
        let updated = diesel::update(email_messages::table.find(self.id))
            .set(&db_updates)
            .get_result::<DbEmailMessage>(conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        *self = updated.into();
        Ok(true)
    }

    fn delete(&self, conn: &mut SqliteConnection) -> RepositoryResult<()> {
        use crate::schema::email_messages;

        let deleted = diesel::delete(email_messages::table.find(self.id)).execute(conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

impl Findable for DomainEmailMessage {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }

    fn find(conn: &mut SqliteConnection, key: &i32) -> RepositoryResult<Option<Self>> {
        use crate::schema::email_messages;

        let message = email_messages::table
            .find(*key)
            .first::<DbEmailMessage>(conn)
            .optional()?;

        Ok(message.map(DomainEmailMessage::from))
    }
}

impl EmailMessageReader for DieselRepository {
    fn get_email_message_by_id(&self, id: i32) -> RepositoryResult<Option<DomainEmailMessage>> {
        let mut conn = self.conn()?;
        DomainEmailMessage::find(&mut conn, &id)
    }

    fn list_email_messages(
        &self,
        query: EmailMessageListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainEmailMessage>)> {
        use crate::schema::email_messages;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = email_messages::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(recipient) = &query.recipient {
                items = items.filter(email_messages::recipient.eq(recipient));
            }
            items
        };

        // Get the total count before applying pagination
        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order(email_messages::id.desc());

        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let messages = items.load::<DbEmailMessage>(&mut conn)?;

        Ok((
            total,
            messages.into_iter().map(DomainEmailMessage::from).collect(),
        ))
    }
}
