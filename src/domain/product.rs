use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::Pagination;
use crate::domain::audit::unstamped;
use crate::domain::category::Category;
use crate::domain::color::Color;
use crate::domain::size::Size;

/// Domain representation of a catalog item sold by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product, `0` until first committed.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Optional longer description shown to customers.
    pub description: Option<String>,
    /// Price represented in the smallest currency unit (for example cents).
    pub price_cents: i32,
    /// Optional location of the cover image.
    pub image_url: Option<String>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// Build an unsaved product; timestamps are assigned when it is committed.
    pub fn new(name: impl Into<String>, price_cents: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: None,
            price_cents,
            image_url: None,
            created_at: unstamped(),
            updated_at: unstamped(),
        }
    }

    /// Attach a descriptive text to the product.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a cover image location to the product.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// A product together with every attribute it is associated with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetails {
    pub product: Product,
    pub categories: Vec<Category>,
    pub colors: Vec<Color>,
    pub sizes: Vec<Size>,
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional name or description search term.
    pub search: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Construct a query that targets all products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the name or description.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_is_unsaved_and_unstamped() {
        let product = Product::new("Dune", 1599)
            .with_description("Desert planet saga")
            .with_image_url("/img/dune.jpg");

        assert_eq!(product.id, 0);
        assert_eq!(product.created_at, unstamped());
        assert_eq!(product.updated_at, unstamped());
        assert_eq!(product.image_url.as_deref(), Some("/img/dune.jpg"));
    }

    #[test]
    fn details_serialize_with_nested_attributes() {
        let details = ProductDetails {
            product: Product::new("Dune", 1599),
            categories: vec![Category::new("Science fiction")],
            colors: vec![Color::new("Blue")],
            sizes: Vec::new(),
        };

        let value = serde_json::to_value(&details).expect("serialization should succeed");

        assert_eq!(value["product"]["name"], "Dune");
        assert_eq!(value["categories"][0]["name"], "Science fiction");
        assert_eq!(value["colors"][0]["name"], "Blue");
        assert!(value["sizes"].as_array().is_some_and(|sizes| sizes.is_empty()));
    }
}
