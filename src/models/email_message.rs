use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::email_message::EmailMessage as DomainEmailMessage;
use crate::models::assigned_id;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::email_messages)]
pub struct EmailMessage {
    pub id: i32,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::email_messages)]
pub struct NewEmailMessage<'a> {
    pub id: Option<i32>,
    pub recipient: &'a str,
    pub subject: &'a str,
    pub body: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::email_messages)]
pub struct UpdateEmailMessage<'a> {
    pub recipient: &'a str,
    pub subject: &'a str,
    pub body: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<EmailMessage> for DomainEmailMessage {
    fn from(value: EmailMessage) -> Self {
        Self {
            id: value.id,
            recipient: value.recipient,
            subject: value.subject,
            body: value.body,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainEmailMessage> for NewEmailMessage<'a> {
    fn from(value: &'a DomainEmailMessage) -> Self {
        Self {
            id: assigned_id(value.id),
            recipient: value.recipient.as_str(),
            subject: value.subject.as_str(),
            body: value.body.as_str(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainEmailMessage> for UpdateEmailMessage<'a> {
    fn from(value: &'a DomainEmailMessage) -> Self {
        Self {
            recipient: value.recipient.as_str(),
            subject: value.subject.as_str(),
            body: value.body.as_str(),
            updated_at: value.updated_at,
        }
    }
}
