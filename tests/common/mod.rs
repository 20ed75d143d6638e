#![allow(dead_code)]

use review_catalog::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub async fn create_test_shop(pool: &PgPool, name: &str, domain_name: &str, link: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO shops (name, domain_name, link) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(domain_name)
    .bind(link)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_review(
    pool: &PgPool,
    title: &str,
    shop_id: i64,
    stars: i32,
    author_email: &str,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO reviews (title, content, shop_id, stars, author_email)
        VALUES ($1, 'Blalalallalla', $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(shop_id)
    .bind(stars)
    .bind(author_email)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_shops(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shops")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_reviews(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Seeds the reference dataset: two shops and eight reviews split 3/5
/// between them, with `stars = n / 2` for n in 2..10.
///
/// Rozetka ends up with reviews #2..#4 (stars 1, 1, 2) and Foxtrot with
/// reviews #5..#9 (stars 2, 3, 3, 4, 4).
pub async fn create_test_shops_and_reviews(pool: &PgPool) -> (i64, i64) {
    let rozetka = create_test_shop(pool, "Rozetka", "rozetka", "https://rozetka.com.ua/").await;
    let foxtrot =
        create_test_shop(pool, "Foxtrot", "foxtrot", "https://www.foxtrot.com.ua/").await;

    for n in 2..10 {
        let shop_id = if n < 5 { rozetka } else { foxtrot };
        create_test_review(
            pool,
            &format!("Review #{n}"),
            shop_id,
            (n / 2) as i32,
            &format!("user{n}@email.com"),
        )
        .await;
    }

    (rozetka, foxtrot)
}
