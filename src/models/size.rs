use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::size::Size as DomainSize;
use crate::models::assigned_id;

/// Stored row, also inserted as-is when seeding reference data.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::sizes)]
pub struct Size {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sizes)]
pub struct NewSize<'a> {
    pub id: Option<i32>,
    pub name: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::sizes)]
pub struct UpdateSize<'a> {
    pub name: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Size> for DomainSize {
    fn from(value: Size) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainSize> for NewSize<'a> {
    fn from(value: &'a DomainSize) -> Self {
        Self {
            id: assigned_id(value.id),
            name: value.name.as_str(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainSize> for UpdateSize<'a> {
    fn from(value: &'a DomainSize) -> Self {
        Self {
            name: value.name.as_str(),
            updated_at: value.updated_at,
        }
    }
}
