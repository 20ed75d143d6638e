//! Repository trait for shop data access.

use crate::domain::entities::{NewShop, Shop};
use crate::domain::ordering::ShopOrder;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shops.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShopRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShopRepository: Send + Sync {
    /// Returns the shop with the given domain name, creating it if absent.
    ///
    /// The lookup and insert are a single atomic statement: concurrent calls
    /// for the same unseen domain produce exactly one row, and the stored
    /// `name` and `link` always come from the first submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_or_create(&self, new_shop: NewShop) -> Result<Shop, AppError>;

    /// Finds a shop by its registrable domain name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_domain(&self, domain_name: &str) -> Result<Option<Shop>, AppError>;

    /// Lists shops, filtered and ordered.
    ///
    /// # Arguments
    ///
    /// - `name` - optional case-insensitive substring match on `domain_name`
    /// - `order` - ordering policy; [`ShopOrder::Unordered`] keeps insertion order
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list<'a>(&self, name: Option<&'a str>, order: ShopOrder)
    -> Result<Vec<Shop>, AppError>;
}
