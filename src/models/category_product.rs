use diesel::prelude::*;

use crate::domain::category_product::CategoryProduct as DomainCategoryProduct;

#[derive(Debug, Clone, Copy, Identifiable, Queryable, Selectable, Insertable, Associations)]
#[diesel(
    table_name = crate::schema::category_products,
    primary_key(product_id, category_id),
    belongs_to(super::product::Product, foreign_key = product_id),
    belongs_to(super::category::Category, foreign_key = category_id)
)]
pub struct CategoryProduct {
    pub product_id: i32,
    pub category_id: i32,
}

impl From<CategoryProduct> for DomainCategoryProduct {
    fn from(value: CategoryProduct) -> Self {
        Self {
            product_id: value.product_id,
            category_id: value.category_id,
        }
    }
}

impl From<&DomainCategoryProduct> for CategoryProduct {
    fn from(value: &DomainCategoryProduct) -> Self {
        Self {
            product_id: value.product_id,
            category_id: value.category_id,
        }
    }
}
