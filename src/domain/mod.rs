//! Plain entity types shared by the repository and its callers.

pub mod audit;
pub mod category;
pub mod category_product;
pub mod color;
pub mod email_message;
pub mod product;
pub mod product_color;
pub mod product_size;
pub mod size;
pub mod slide_banner;

/// Page selection applied to list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    /// Maximum number of items per page.
    pub per_page: usize,
}

impl Pagination {
    /// Number of rows skipped before the requested page starts.
    pub fn offset(&self) -> i64 {
        ((self.page.max(1) - 1) * self.per_page) as i64
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn offset_treats_page_zero_as_first_page() {
        let first = Pagination { page: 0, per_page: 20 };
        assert_eq!(first.offset(), 0);

        let third = Pagination { page: 3, per_page: 20 };
        assert_eq!(third.offset(), 40);
        assert_eq!(third.limit(), 20);
    }
}
