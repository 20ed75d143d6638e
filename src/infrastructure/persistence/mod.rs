//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound queries and `FromRow` mapping.
//!
//! # Repositories
//!
//! - [`PgShopRepository`] - Shop resolution and listings
//! - [`PgReviewRepository`] - Review storage and retrieval

pub mod pg_review_repository;
pub mod pg_shop_repository;

pub use pg_review_repository::PgReviewRepository;
pub use pg_shop_repository::PgShopRepository;
