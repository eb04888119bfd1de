use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::audit::unstamped;

/// Domain representation of a product grouping such as a genre.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier of the category, `0` until first committed.
    pub id: i32,
    /// Human-readable name of the category.
    pub name: String,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

impl Category {
    /// Build an unsaved category with a trimmed name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into().trim().to_string(),
            created_at: unstamped(),
            updated_at: unstamped(),
        }
    }
}
