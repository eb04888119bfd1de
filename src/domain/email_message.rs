use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::Pagination;
use crate::domain::audit::unstamped;

/// Outgoing email recorded by the store before delivery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailMessage {
    pub id: i32,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl EmailMessage {
    /// Build an unsaved message with a trimmed recipient address.
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            recipient: recipient.into().trim().to_string(),
            subject: subject.into(),
            body: body.into(),
            created_at: unstamped(),
            updated_at: unstamped(),
        }
    }
}

/// Query definition used to list recorded email messages.
#[derive(Debug, Clone, Default)]
pub struct EmailMessageListQuery {
    /// Optional exact recipient filter.
    pub recipient: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl EmailMessageListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results to messages sent to `recipient`.
    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
