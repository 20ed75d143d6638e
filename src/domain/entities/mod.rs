//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic, following the
//! "New Type" pattern with separate structs for creation and partial updates:
//!
//! - [`Shop`] / [`NewShop`] - A reviewed retailer keyed by registrable domain
//! - [`Review`] / [`NewReview`] / [`ReviewPatch`] - A rated entry for a shop

pub mod review;
pub mod shop;

pub use review::{NewReview, Review, ReviewPatch};
pub use shop::{NewShop, Shop};
