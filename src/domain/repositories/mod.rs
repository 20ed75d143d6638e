//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`ShopRepository`] - Shop resolution and filtered/ordered listings
//! - [`ReviewRepository`] - Review CRUD operations

pub mod review_repository;
pub mod shop_repository;

pub use review_repository::ReviewRepository;
pub use shop_repository::ShopRepository;

#[cfg(test)]
pub use review_repository::MockReviewRepository;
#[cfg(test)]
pub use shop_repository::MockShopRepository;
