use diesel::prelude::*;

use crate::domain::product_color::ProductColor as DomainProductColor;

#[derive(Debug, Clone, Copy, Identifiable, Queryable, Selectable, Insertable, Associations)]
#[diesel(
    table_name = crate::schema::product_colors,
    primary_key(product_id, color_id),
    belongs_to(super::product::Product, foreign_key = product_id),
    belongs_to(super::color::Color, foreign_key = color_id)
)]
pub struct ProductColor {
    pub product_id: i32,
    pub color_id: i32,
}

impl From<ProductColor> for DomainProductColor {
    fn from(value: ProductColor) -> Self {
        Self {
            product_id: value.product_id,
            color_id: value.color_id,
        }
    }
}

impl From<&DomainProductColor> for ProductColor {
    fn from(value: &DomainProductColor) -> Self {
        Self {
            product_id: value.product_id,
            color_id: value.color_id,
        }
    }
}
