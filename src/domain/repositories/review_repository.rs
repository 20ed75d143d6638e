//! Repository trait for review data access.

use crate::domain::entities::{NewReview, Review, ReviewPatch};
use crate::domain::ordering::ReviewOrder;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for reviews.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgReviewRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Creates a new review. `date_created` and `date_updated` are assigned
    /// by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_review: NewReview) -> Result<Review, AppError>;

    /// Finds a review by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, AppError>;

    /// Lists reviews, optionally filtered by exact author email.
    ///
    /// The author match is case-sensitive and full-string; no partial
    /// matching. Ordering follows the given policy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list<'a>(
        &self,
        author: Option<&'a str>,
        order: ReviewOrder,
    ) -> Result<Vec<Review>, AppError>;

    /// Partially updates a review.
    ///
    /// Only fields present in [`ReviewPatch`] are modified; `date_updated`
    /// is refreshed whenever the row is touched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no review matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: ReviewPatch) -> Result<Review, AppError>;

    /// Deletes a review.
    ///
    /// Returns `Ok(true)` if the review was found and deleted, `Ok(false)`
    /// if no review matched `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
