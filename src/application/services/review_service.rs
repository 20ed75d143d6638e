//! Review CRUD service.

use std::sync::Arc;

use crate::application::services::ShopResolver;
use crate::domain::entities::{NewReview, Review, ReviewPatch};
use crate::domain::ordering::ReviewOrder;
use crate::domain::repositories::{ReviewRepository, ShopRepository};
use crate::error::AppError;
use serde_json::json;

/// Fields accepted when creating a review, before shop resolution.
///
/// The shop is referenced by URL here; the resolved shop id only exists on
/// [`NewReview`], so an unresolved link can never reach the repository.
#[derive(Debug, Clone)]
pub struct ReviewDraft {
    pub title: String,
    pub content: String,
    pub stars: i32,
    pub author_email: String,
    pub shop_link: String,
}

/// Fields accepted when partially updating a review.
#[derive(Debug, Clone, Default)]
pub struct ReviewChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub stars: Option<i32>,
    pub author_email: Option<String>,
    /// When present, the review is re-pointed at the shop this link resolves to.
    pub shop_link: Option<String>,
}

/// Service for creating, updating, listing and deleting reviews.
///
/// Field validation happens at the DTO layer before any of these methods run,
/// so a malformed review body is rejected before shop resolution can create
/// a shop as a side effect.
pub struct ReviewService<R: ReviewRepository, S: ShopRepository> {
    review_repository: Arc<R>,
    shop_resolver: ShopResolver<S>,
}

impl<R: ReviewRepository, S: ShopRepository> ReviewService<R, S> {
    /// Creates a new review service.
    pub fn new(review_repository: Arc<R>, shop_repository: Arc<S>) -> Self {
        Self {
            review_repository,
            shop_resolver: ShopResolver::new(shop_repository),
        }
    }

    /// Creates a review, resolving its shop link first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the shop link cannot be resolved.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_review(&self, draft: ReviewDraft) -> Result<Review, AppError> {
        let shop_id = self.shop_resolver.resolve(&draft.shop_link).await?;

        let new_review = NewReview {
            title: draft.title,
            content: draft.content,
            shop_id,
            stars: draft.stars,
            author_email: draft.author_email,
        };

        self.review_repository.create(new_review).await
    }

    /// Lists reviews, newest first, optionally filtered by exact author email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_reviews(&self, author: Option<String>) -> Result<Vec<Review>, AppError> {
        self.review_repository
            .list(author.as_deref(), ReviewOrder::default())
            .await
    }

    /// Retrieves a review by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no review matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_review(&self, id: i64) -> Result<Review, AppError> {
        self.review_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Review not found", json!({ "id": id })))
    }

    /// Partially updates a review.
    ///
    /// The shop resolver runs only when `changes.shop_link` is present; the
    /// existing shop reference is otherwise untouched. `date_updated` is
    /// refreshed by the repository on every successful update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a provided shop link cannot be resolved.
    /// Returns [`AppError::NotFound`] if no review matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_review(&self, id: i64, changes: ReviewChanges) -> Result<Review, AppError> {
        let shop_id = match &changes.shop_link {
            Some(link) => Some(self.shop_resolver.resolve(link).await?),
            None => None,
        };

        let patch = ReviewPatch {
            title: changes.title,
            content: changes.content,
            stars: changes.stars,
            author_email: changes.author_email,
            shop_id,
        };

        self.review_repository.update(id, patch).await
    }

    /// Deletes a review.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no review matches `id` — deleting a
    /// nonexistent review is an error, not a no-op.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_review(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.review_repository.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found("Review not found", json!({ "id": id })));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Shop;
    use crate::domain::repositories::{MockReviewRepository, MockShopRepository};
    use chrono::Utc;

    fn sample_review(id: i64, shop_id: i64) -> Review {
        let now = Utc::now();
        Review::new(
            id,
            "Review #2".to_string(),
            "Blalalallalla".to_string(),
            shop_id,
            3,
            "user2@email.com".to_string(),
            now,
            now,
        )
    }

    fn sample_draft() -> ReviewDraft {
        ReviewDraft {
            title: "Review #2".to_string(),
            content: "Blalalallalla".to_string(),
            stars: 3,
            author_email: "user2@email.com".to_string(),
            shop_link: "https://rozetka.com.ua/".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_review_resolves_shop_then_persists() {
        let mut mock_shops = MockShopRepository::new();
        mock_shops
            .expect_find_or_create()
            .withf(|new_shop| new_shop.domain_name == "rozetka" && new_shop.name == "Rozetka")
            .times(1)
            .returning(|new_shop| {
                Ok(Shop::new(
                    9,
                    new_shop.name,
                    new_shop.domain_name,
                    new_shop.link,
                ))
            });

        let mut mock_reviews = MockReviewRepository::new();
        mock_reviews
            .expect_create()
            .withf(|new_review| new_review.shop_id == 9 && new_review.stars == 3)
            .times(1)
            .returning(|_| Ok(sample_review(1, 9)));

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(mock_shops));
        let review = service.create_review(sample_draft()).await.unwrap();

        assert_eq!(review.shop_id, 9);
    }

    #[tokio::test]
    async fn test_create_review_bad_link_creates_nothing() {
        let mut mock_shops = MockShopRepository::new();
        mock_shops.expect_find_or_create().times(0);

        let mut mock_reviews = MockReviewRepository::new();
        mock_reviews.expect_create().times(0);

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(mock_shops));
        let mut draft = sample_draft();
        draft.shop_link = "nonsense".to_string();

        let result = service.create_review(draft).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_without_shop_link_skips_resolution() {
        let mut mock_shops = MockShopRepository::new();
        mock_shops.expect_find_or_create().times(0);

        let mut mock_reviews = MockReviewRepository::new();
        mock_reviews
            .expect_update()
            .withf(|id, patch| {
                *id == 5 && patch.title == Some("New title".to_string()) && patch.shop_id.is_none()
            })
            .times(1)
            .returning(|id, _| Ok(sample_review(id, 9)));

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(mock_shops));
        let changes = ReviewChanges {
            title: Some("New title".to_string()),
            ..Default::default()
        };

        service.update_review(5, changes).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_with_shop_link_replaces_shop_reference() {
        let mut mock_shops = MockShopRepository::new();
        mock_shops
            .expect_find_or_create()
            .withf(|new_shop| new_shop.domain_name == "foxtrot")
            .times(1)
            .returning(|new_shop| {
                Ok(Shop::new(
                    12,
                    new_shop.name,
                    new_shop.domain_name,
                    new_shop.link,
                ))
            });

        let mut mock_reviews = MockReviewRepository::new();
        mock_reviews
            .expect_update()
            .withf(|_, patch| patch.shop_id == Some(12))
            .times(1)
            .returning(|id, _| Ok(sample_review(id, 12)));

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(mock_shops));
        let changes = ReviewChanges {
            shop_link: Some("https://www.foxtrot.com.ua/".to_string()),
            ..Default::default()
        };

        let review = service.update_review(5, changes).await.unwrap();
        assert_eq!(review.shop_id, 12);
    }

    #[tokio::test]
    async fn test_get_review_not_found() {
        let mock_shops = MockShopRepository::new();
        let mut mock_reviews = MockReviewRepository::new();
        mock_reviews
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(mock_shops));
        let result = service.get_review(999).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_review_not_found() {
        let mock_shops = MockShopRepository::new();
        let mut mock_reviews = MockReviewRepository::new();
        mock_reviews.expect_delete().times(1).returning(|_| Ok(false));

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(mock_shops));
        let result = service.delete_review(999).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_review_success() {
        let mock_shops = MockShopRepository::new();
        let mut mock_reviews = MockReviewRepository::new();
        mock_reviews.expect_delete().times(1).returning(|_| Ok(true));

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(mock_shops));
        service.delete_review(5).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_reviews_uses_newest_first_policy() {
        let mock_shops = MockShopRepository::new();
        let mut mock_reviews = MockReviewRepository::new();
        mock_reviews
            .expect_list()
            .withf(|author, order| {
                *author == Some("user3@email.com") && *order == ReviewOrder::NewestFirst
            })
            .times(1)
            .returning(|_, _| Ok(vec![sample_review(3, 1)]));

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(mock_shops));
        let reviews = service
            .list_reviews(Some("user3@email.com".to_string()))
            .await
            .unwrap();

        assert_eq!(reviews.len(), 1);
    }
}
