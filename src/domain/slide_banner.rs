use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::audit::unstamped;

/// Banner shown in the storefront carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlideBanner {
    /// Unique identifier of the banner, `0` until first committed.
    pub id: i32,
    /// Headline rendered on the slide.
    pub title: String,
    /// Optional secondary text.
    pub description: Option<String>,
    /// Location of the background image.
    pub image_url: String,
    /// Sort key within the carousel, lowest first.
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl SlideBanner {
    pub fn new(title: impl Into<String>, image_url: impl Into<String>, position: i32) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: None,
            image_url: image_url.into(),
            position,
            created_at: unstamped(),
            updated_at: unstamped(),
        }
    }

    /// Attach a secondary text to the banner.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
