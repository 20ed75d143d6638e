//! Business logic services for the application layer.

pub mod review_service;
pub mod shop_resolver;
pub mod shop_service;

pub use review_service::{ReviewChanges, ReviewDraft, ReviewService};
pub use shop_resolver::ShopResolver;
pub use shop_service::ShopService;
