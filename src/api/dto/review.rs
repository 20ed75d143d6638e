//! DTOs for review endpoints.

use crate::domain::entities::Review;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for `GET /reviews`.
#[derive(Debug, Deserialize, Default)]
pub struct ReviewListQuery {
    /// Exact, case-sensitive match on `author_email`.
    pub author: Option<String>,
}

/// Request body for `POST /reviews`.
///
/// The shop is referenced by URL; resolution to a shop id happens after this
/// body validates, so a malformed review never creates a shop.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, max = 155))]
    pub title: String,

    #[validate(length(min = 1))]
    pub content: String,

    #[validate(range(min = 1, max = 5))]
    pub stars: i32,

    #[validate(email(message = "Invalid email syntax"))]
    pub author_email: String,

    #[validate(url(message = "Invalid URL format"))]
    pub shop_link: String,
}

/// Request body for `PATCH /reviews/{id}`.
///
/// All fields are optional — only provided fields are changed. A provided
/// `shop_link` re-points the review at the shop the link resolves to.
#[derive(Debug, Deserialize, Default, Validate)]
pub struct UpdateReviewRequest {
    #[validate(length(min = 1, max = 155))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub content: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub stars: Option<i32>,

    #[validate(email(message = "Invalid email syntax"))]
    pub author_email: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub shop_link: Option<String>,
}

/// JSON representation of a review.
///
/// The shop reference is exposed as `shop`, carrying the resolved shop id.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub shop: i64,
    pub stars: i32,
    pub author_email: String,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            title: review.title,
            content: review.content,
            shop: review.shop_id,
            stars: review.stars,
            author_email: review.author_email,
            date_created: review.date_created,
            date_updated: review.date_updated,
        }
    }
}
