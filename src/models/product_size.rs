use diesel::prelude::*;

use crate::domain::product_size::ProductSize as DomainProductSize;

#[derive(Debug, Clone, Copy, Identifiable, Queryable, Selectable, Insertable, Associations)]
#[diesel(
    table_name = crate::schema::product_sizes,
    primary_key(product_id, size_id),
    belongs_to(super::product::Product, foreign_key = product_id),
    belongs_to(super::size::Size, foreign_key = size_id)
)]
pub struct ProductSize {
    pub product_id: i32,
    pub size_id: i32,
}

impl From<ProductSize> for DomainProductSize {
    fn from(value: ProductSize) -> Self {
        Self {
            product_id: value.product_id,
            size_id: value.size_id,
        }
    }
}

impl From<&DomainProductSize> for ProductSize {
    fn from(value: &DomainProductSize) -> Self {
        Self {
            product_id: value.product_id,
            size_id: value.size_id,
        }
    }
}
