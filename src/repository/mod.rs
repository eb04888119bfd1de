use std::sync::Arc;

use crate::db::{DbConnection, DbPool};
use crate::domain::audit::{Clock, UtcClock};
use crate::domain::category::Category;
use crate::domain::category_product::CategoryProduct;
use crate::domain::color::Color;
use crate::domain::email_message::{EmailMessage, EmailMessageListQuery};
use crate::domain::product::{Product, ProductDetails, ProductListQuery};
use crate::domain::product_color::ProductColor;
use crate::domain::product_size::ProductSize;
use crate::domain::size::Size;
use crate::domain::slide_banner::SlideBanner;
use crate::repository::errors::RepositoryResult;
use crate::repository::unit_of_work::UnitOfWork;

pub mod associations;
pub mod audit;
pub mod category;
pub mod color;
pub mod email_message;
pub mod errors;
pub mod product;
pub mod seed;
pub mod size;
pub mod slide_banner;
pub mod unit_of_work;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
///
/// Reads go through the reader traits below; every write goes through a
/// [`UnitOfWork`] opened with [`DieselRepository::begin`].
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
    clock: Arc<dyn Clock>,
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool and the UTC wall clock.
    pub fn new(pool: DbPool) -> Self {
        Self::with_clock(pool, Arc::new(UtcClock))
    }

    /// Create a repository whose units of work stamp entities with `clock`.
    pub fn with_clock(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }

    /// Open a unit of work holding its own pooled connection.
    pub fn begin(&self) -> RepositoryResult<UnitOfWork> {
        Ok(UnitOfWork::new(self.conn()?, Arc::clone(&self.clock)))
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    fn get_product_details(&self, id: i32) -> RepositoryResult<Option<ProductDetails>>;
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    fn list_products_in_category(&self, category_id: i32) -> RepositoryResult<Vec<Product>>;
}

/// Read-only operations over color records.
pub trait ColorReader {
    fn get_color_by_id(&self, id: i32) -> RepositoryResult<Option<Color>>;
    fn list_colors(&self) -> RepositoryResult<Vec<Color>>;
}

/// Read-only operations over size records.
pub trait SizeReader {
    fn get_size_by_id(&self, id: i32) -> RepositoryResult<Option<Size>>;
    fn list_sizes(&self) -> RepositoryResult<Vec<Size>>;
}

/// Read-only operations over carousel banners.
pub trait SlideBannerReader {
    fn get_slide_banner_by_id(&self, id: i32) -> RepositoryResult<Option<SlideBanner>>;
    fn list_slide_banners(&self) -> RepositoryResult<Vec<SlideBanner>>;
}

/// Read-only operations over recorded email messages.
pub trait EmailMessageReader {
    fn get_email_message_by_id(&self, id: i32) -> RepositoryResult<Option<EmailMessage>>;
    fn list_email_messages(
        &self,
        query: EmailMessageListQuery,
    ) -> RepositoryResult<(usize, Vec<EmailMessage>)>;
}

/// Read-only access to the join rows attached to a product.
pub trait AssociationReader {
    fn list_category_products(&self, product_id: i32) -> RepositoryResult<Vec<CategoryProduct>>;
    fn list_product_colors(&self, product_id: i32) -> RepositoryResult<Vec<ProductColor>>;
    fn list_product_sizes(&self, product_id: i32) -> RepositoryResult<Vec<ProductSize>>;
}
