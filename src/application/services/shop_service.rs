//! Shop listing service.

use std::sync::Arc;

use crate::domain::entities::Shop;
use crate::domain::ordering::ShopOrder;
use crate::domain::repositories::ShopRepository;
use crate::error::AppError;

/// Service for listing shops with filtering and derived ordering.
pub struct ShopService<S: ShopRepository> {
    repository: Arc<S>,
}

impl<S: ShopRepository> ShopService<S> {
    /// Creates a new shop service.
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// Lists shops, filtered by domain-name substring and ordered per the
    /// raw `order` query parameter.
    ///
    /// - `name` - case-insensitive substring match on `domain_name`
    /// - `order` - `reviews`, `-reviews`, `rate` or `-rate`; anything else,
    ///   including absent, keeps insertion order
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_shops(
        &self,
        name: Option<String>,
        order: Option<String>,
    ) -> Result<Vec<Shop>, AppError> {
        let order = ShopOrder::parse(order.as_deref());
        self.repository.list(name.as_deref(), order).await
    }
}
