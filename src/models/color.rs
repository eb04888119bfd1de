use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::color::Color as DomainColor;
use crate::models::assigned_id;

/// Stored row, also inserted as-is when seeding reference data.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::colors)]
pub struct Color {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::colors)]
pub struct NewColor<'a> {
    pub id: Option<i32>,
    pub name: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::colors)]
pub struct UpdateColor<'a> {
    pub name: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Color> for DomainColor {
    fn from(value: Color) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainColor> for NewColor<'a> {
    fn from(value: &'a DomainColor) -> Self {
        Self {
            id: assigned_id(value.id),
            name: value.name.as_str(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainColor> for UpdateColor<'a> {
    fn from(value: &'a DomainColor) -> Self {
        Self {
            name: value.name.as_str(),
            updated_at: value.updated_at,
        }
    }
}
