use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::models::assigned_id;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory<'a> {
    pub id: Option<i32>,
    pub name: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
pub struct UpdateCategory<'a> {
    pub name: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Category> for DomainCategory {
    fn from(value: Category) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainCategory> for NewCategory<'a> {
    fn from(value: &'a DomainCategory) -> Self {
        Self {
            id: assigned_id(value.id),
            name: value.name.as_str(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainCategory> for UpdateCategory<'a> {
    fn from(value: &'a DomainCategory) -> Self {
        Self {
            name: value.name.as_str(),
            updated_at: value.updated_at,
        }
    }
}
