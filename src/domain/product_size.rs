use serde::{Deserialize, Serialize};

/// Association between a product and a size it is offered in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductSize {
    pub product_id: i32,
    pub size_id: i32,
}

impl ProductSize {
    pub fn new(product_id: i32, size_id: i32) -> Self {
        Self {
            product_id,
            size_id,
        }
    }
}
