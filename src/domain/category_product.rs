use serde::{Deserialize, Serialize};

/// Association between a product and a category.
///
/// Identified by the `(product_id, category_id)` pair; there is no surrogate key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CategoryProduct {
    /// Identifier of the categorized product.
    pub product_id: i32,
    /// Identifier of the category the product belongs to.
    pub category_id: i32,
}

impl CategoryProduct {
    /// Construct an association between a product and a category.
    pub fn new(product_id: i32, category_id: i32) -> Self {
        Self {
            product_id,
            category_id,
        }
    }
}
