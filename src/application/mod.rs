//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! shop resolution, and ordering policies. Services consume repository traits
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shop_resolver::ShopResolver`] - URL-to-shop resolution with get-or-create
//! - [`services::shop_service::ShopService`] - Filtered and ordered shop listings
//! - [`services::review_service::ReviewService`] - Review CRUD

pub mod services;
