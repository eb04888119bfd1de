use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::slide_banner::SlideBanner as DomainSlideBanner;
use crate::models::assigned_id;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::slide_banners)]
pub struct SlideBanner {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::slide_banners)]
pub struct NewSlideBanner<'a> {
    pub id: Option<i32>,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub image_url: &'a str,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::slide_banners)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateSlideBanner<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub image_url: &'a str,
    pub position: i32,
    pub updated_at: NaiveDateTime,
}

impl From<SlideBanner> for DomainSlideBanner {
    fn from(value: SlideBanner) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            image_url: value.image_url,
            position: value.position,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainSlideBanner> for NewSlideBanner<'a> {
    fn from(value: &'a DomainSlideBanner) -> Self {
        Self {
            id: assigned_id(value.id),
            title: value.title.as_str(),
            description: value.description.as_deref(),
            image_url: value.image_url.as_str(),
            position: value.position,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainSlideBanner> for UpdateSlideBanner<'a> {
    fn from(value: &'a DomainSlideBanner) -> Self {
        Self {
            title: value.title.as_str(),
            description: value.description.as_deref(),
            image_url: value.image_url.as_str(),
            position: value.position,
            updated_at: value.updated_at,
        }
    }
}
