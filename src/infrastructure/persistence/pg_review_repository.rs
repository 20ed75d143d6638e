//! PostgreSQL implementation of the review repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewReview, Review, ReviewPatch};
use crate::domain::ordering::ReviewOrder;
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;

/// PostgreSQL repository for review storage and retrieval.
pub struct PgReviewRepository {
    pool: Arc<PgPool>,
}

impl PgReviewRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn review_order_clause(order: ReviewOrder) -> &'static str {
    match order {
        // id tiebreak keeps the order stable when creation timestamps collide.
        ReviewOrder::NewestFirst => "date_created DESC, id DESC",
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn create(&self, new_review: NewReview) -> Result<Review, AppError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (title, content, shop_id, stars, author_email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, content, shop_id, stars, author_email,
                      date_created, date_updated
            "#,
        )
        .bind(&new_review.title)
        .bind(&new_review.content)
        .bind(new_review.shop_id)
        .bind(new_review.stars)
        .bind(&new_review.author_email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(review)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, AppError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, title, content, shop_id, stars, author_email,
                   date_created, date_updated
            FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(review)
    }

    async fn list<'a>(
        &self,
        author: Option<&'a str>,
        order: ReviewOrder,
    ) -> Result<Vec<Review>, AppError> {
        let sql = format!(
            r#"
            SELECT id, title, content, shop_id, stars, author_email,
                   date_created, date_updated
            FROM reviews
            WHERE ($1::text IS NULL OR author_email = $1)
            ORDER BY {}
            "#,
            review_order_clause(order)
        );

        let reviews = sqlx::query_as::<_, Review>(&sql)
            .bind(author)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(reviews)
    }

    async fn update(&self, id: i64, patch: ReviewPatch) -> Result<Review, AppError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            UPDATE reviews SET
                title        = COALESCE($2, title),
                content      = COALESCE($3, content),
                stars        = COALESCE($4, stars),
                author_email = COALESCE($5, author_email),
                shop_id      = COALESCE($6, shop_id),
                date_updated = NOW()
            WHERE id = $1
            RETURNING id, title, content, shop_id, stars, author_email,
                      date_created, date_updated
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(patch.stars)
        .bind(patch.author_email)
        .bind(patch.shop_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        review.ok_or_else(|| AppError::not_found("Review not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
