use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::audit::unstamped;

/// Color a product can be offered in.
///
/// Reference colors are seeded with negative identifiers; colors created at
/// runtime receive positive ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Color {
    /// Build an unsaved color with a trimmed name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into().trim().to_string(),
            created_at: unstamped(),
            updated_at: unstamped(),
        }
    }
}
