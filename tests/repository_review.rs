mod common;

use review_catalog::domain::entities::{NewReview, ReviewPatch};
use review_catalog::domain::ordering::ReviewOrder;
use review_catalog::domain::repositories::ReviewRepository;
use review_catalog::infrastructure::persistence::PgReviewRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_assigns_id_and_timestamps(pool: PgPool) {
    let shop =
        common::create_test_shop(&pool, "Rozetka", "rozetka", "https://rozetka.com.ua/").await;
    let repo = PgReviewRepository::new(Arc::new(pool));

    let review = repo
        .create(NewReview {
            title: "Test review".to_string(),
            content: "Test content".to_string(),
            shop_id: shop,
            stars: 3,
            author_email: "user@email.com".to_string(),
        })
        .await
        .unwrap();

    assert!(review.id > 0);
    assert_eq!(review.shop_id, shop);
    assert_eq!(review.date_created, review.date_updated);
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let shop =
        common::create_test_shop(&pool, "Rozetka", "rozetka", "https://rozetka.com.ua/").await;
    let id = common::create_test_review(&pool, "Test review", shop, 3, "user@email.com").await;
    let repo = PgReviewRepository::new(Arc::new(pool));

    let found = repo.find_by_id(id).await.unwrap();
    assert_eq!(found.unwrap().title, "Test review");

    let missing = repo.find_by_id(id + 1000).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_list_newest_first(pool: PgPool) {
    common::create_test_shops_and_reviews(&pool).await;
    let repo = PgReviewRepository::new(Arc::new(pool));

    let reviews = repo.list(None, ReviewOrder::NewestFirst).await.unwrap();

    assert_eq!(reviews.len(), 8);
    assert_eq!(reviews[0].title, "Review #9");
    assert_eq!(reviews[7].title, "Review #2");
    for pair in reviews.windows(2) {
        assert!(pair[0].date_created >= pair[1].date_created);
    }
}

#[sqlx::test]
async fn test_list_filters_by_exact_author(pool: PgPool) {
    common::create_test_shops_and_reviews(&pool).await;
    let repo = PgReviewRepository::new(Arc::new(pool));

    let reviews = repo
        .list(Some("user3@email.com"), ReviewOrder::NewestFirst)
        .await
        .unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].title, "Review #3");

    // Substring never matches.
    let partial = repo.list(Some("user3"), ReviewOrder::NewestFirst).await.unwrap();
    assert!(partial.is_empty());
}

#[sqlx::test]
async fn test_update_applies_only_provided_fields(pool: PgPool) {
    let shop =
        common::create_test_shop(&pool, "Rozetka", "rozetka", "https://rozetka.com.ua/").await;
    let id = common::create_test_review(&pool, "Old title", shop, 4, "user@email.com").await;
    let repo = PgReviewRepository::new(Arc::new(pool));

    let updated = repo
        .update(
            id,
            ReviewPatch {
                title: Some("New title".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.stars, 4);
    assert_eq!(updated.author_email, "user@email.com");
    assert_eq!(updated.shop_id, shop);
    assert!(updated.date_updated > updated.date_created);
}

#[sqlx::test]
async fn test_update_unknown_id_is_not_found(pool: PgPool) {
    let repo = PgReviewRepository::new(Arc::new(pool));

    let result = repo
        .update(
            9999,
            ReviewPatch {
                title: Some("ghost".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result.unwrap_err(),
        review_catalog::AppError::NotFound { .. }
    ));
}

#[sqlx::test]
async fn test_delete_reports_whether_row_existed(pool: PgPool) {
    let shop =
        common::create_test_shop(&pool, "Rozetka", "rozetka", "https://rozetka.com.ua/").await;
    let id = common::create_test_review(&pool, "Review", shop, 3, "user@email.com").await;
    let repo = PgReviewRepository::new(Arc::new(pool));

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
}

#[sqlx::test]
async fn test_deleting_shop_cascades_to_reviews(pool: PgPool) {
    let (rozetka, _) = common::create_test_shops_and_reviews(&pool).await;

    sqlx::query("DELETE FROM shops WHERE id = $1")
        .bind(rozetka)
        .execute(&pool)
        .await
        .unwrap();

    // Rozetka owned 3 of the 8 reviews.
    assert_eq!(common::count_reviews(&pool).await, 5);
}
