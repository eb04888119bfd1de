use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::audit::unstamped;

/// Size a product can be offered in. Seeded sizes use negative identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Size {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Size {
    /// Build an unsaved size with a trimmed name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into().trim().to_string(),
            created_at: unstamped(),
            updated_at: unstamped(),
        }
    }
}
