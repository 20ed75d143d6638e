//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ReviewService, ShopService};
use crate::infrastructure::persistence::{PgReviewRepository, PgShopRepository};

/// Shop service backed by the PostgreSQL repositories.
pub type SharedShopService = Arc<ShopService<PgShopRepository>>;
/// Review service backed by the PostgreSQL repositories.
pub type SharedReviewService = Arc<ReviewService<PgReviewRepository, PgShopRepository>>;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub shop_service: SharedShopService,
    pub review_service: SharedReviewService,
}

impl AppState {
    /// Wires repositories and services around a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let shop_repository = Arc::new(PgShopRepository::new(pool.clone()));
        let review_repository = Arc::new(PgReviewRepository::new(pool.clone()));

        let shop_service = Arc::new(ShopService::new(shop_repository.clone()));
        let review_service = Arc::new(ReviewService::new(review_repository, shop_repository));

        Self {
            db: pool,
            shop_service,
            review_service,
        }
    }
}
