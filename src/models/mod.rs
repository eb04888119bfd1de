//! Diesel row types and their conversions to and from domain entities.

pub mod category;
pub mod category_product;
pub mod color;
pub mod email_message;
pub mod product;
pub mod product_color;
pub mod product_size;
pub mod size;
pub mod slide_banner;

/// Unsaved entities carry id `0` and let the database assign one.
pub(crate) fn assigned_id(id: i32) -> Option<i32> {
    (id != 0).then_some(id)
}
