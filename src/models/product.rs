use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::Product as DomainProduct;
use crate::models::assigned_id;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub id: Option<i32>,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price_cents: i32,
    pub image_url: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price_cents: i32,
    pub image_url: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price_cents: value.price_cents,
            image_url: value.image_url,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainProduct> for NewProduct<'a> {
    fn from(value: &'a DomainProduct) -> Self {
        Self {
            id: assigned_id(value.id),
            name: value.name.as_str(),
            description: value.description.as_deref(),
            price_cents: value.price_cents,
            image_url: value.image_url.as_deref(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainProduct) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_deref(),
            price_cents: value.price_cents,
            image_url: value.image_url.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
