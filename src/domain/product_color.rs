use serde::{Deserialize, Serialize};

/// Association between a product and a color it is offered in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductColor {
    pub product_id: i32,
    pub color_id: i32,
}

impl ProductColor {
    pub fn new(product_id: i32, color_id: i32) -> Self {
        Self {
            product_id,
            color_id,
        }
    }
}
