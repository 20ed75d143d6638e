//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod reviews;
pub mod shops;

pub use health::health_handler;
pub use reviews::{
    create_review_handler, delete_review_handler, get_review_handler, review_list_handler,
    update_review_handler,
};
pub use shops::shop_list_handler;
