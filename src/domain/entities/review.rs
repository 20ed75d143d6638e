//! Review entity representing a rated, authored text entry for a shop.

use chrono::{DateTime, Utc};

/// A review attached to exactly one shop.
///
/// `date_created` is set once at insert time; `date_updated` is refreshed on
/// every mutation.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub shop_id: i64,
    pub stars: i32,
    pub author_email: String,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl Review {
    /// Creates a new Review instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: String,
        content: String,
        shop_id: i64,
        stars: i32,
        author_email: String,
        date_created: DateTime<Utc>,
        date_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            shop_id,
            stars,
            author_email,
            date_created,
            date_updated,
        }
    }
}

/// Input data for creating a new review.
///
/// `shop_id` is always a resolved shop identifier — the raw `shop_link` from
/// the request never reaches the repository layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub title: String,
    pub content: String,
    pub shop_id: i64,
    pub stars: i32,
    pub author_email: String,
}

/// Partial update for an existing review.
///
/// `None` fields are left unchanged. `shop_id` is set only when the update
/// payload carried a new `shop_link` that was resolved to a shop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub stars: Option<i32>,
    pub author_email: Option<String>,
    pub shop_id: Option<i64>,
}
