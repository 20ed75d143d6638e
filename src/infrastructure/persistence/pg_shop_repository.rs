//! PostgreSQL implementation of the shop repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShop, Shop};
use crate::domain::ordering::ShopOrder;
use crate::domain::repositories::ShopRepository;
use crate::error::AppError;

/// PostgreSQL repository for shop storage, resolution and listings.
///
/// Get-or-create relies on the unique constraint on `shops.domain_name`:
/// the upsert is a single statement, so concurrent resolution of the same
/// new domain collapses to one row without a read-then-write window.
pub struct PgShopRepository {
    pool: Arc<PgPool>,
}

impl PgShopRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// ORDER BY clause for a listing order. Review count and mean rating come
/// from the aggregated join; shops with no reviews have a NULL mean and sort
/// per PostgreSQL's default null placement. `s.id` breaks ties so listings
/// stay stable.
fn order_clause(order: ShopOrder) -> &'static str {
    match order {
        ShopOrder::ReviewsAsc => "COUNT(r.id) ASC, s.id",
        ShopOrder::ReviewsDesc => "COUNT(r.id) DESC, s.id",
        ShopOrder::RatingAsc => "AVG(r.stars) ASC, s.id",
        ShopOrder::RatingDesc => "AVG(r.stars) DESC, s.id",
        ShopOrder::Unordered => "s.id",
    }
}

#[async_trait]
impl ShopRepository for PgShopRepository {
    async fn find_or_create(&self, new_shop: NewShop) -> Result<Shop, AppError> {
        // The no-op DO UPDATE makes the statement return the surviving row
        // on conflict; the stored name and link stay as first submitted.
        let shop = sqlx::query_as::<_, Shop>(
            r#"
            INSERT INTO shops (name, domain_name, link)
            VALUES ($1, $2, $3)
            ON CONFLICT (domain_name) DO UPDATE SET domain_name = excluded.domain_name
            RETURNING id, name, domain_name, link
            "#,
        )
        .bind(&new_shop.name)
        .bind(&new_shop.domain_name)
        .bind(&new_shop.link)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(shop)
    }

    async fn find_by_domain(&self, domain_name: &str) -> Result<Option<Shop>, AppError> {
        let shop = sqlx::query_as::<_, Shop>(
            r#"
            SELECT id, name, domain_name, link
            FROM shops
            WHERE domain_name = $1
            "#,
        )
        .bind(domain_name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(shop)
    }

    async fn list<'a>(&self, name: Option<&'a str>, order: ShopOrder) -> Result<Vec<Shop>, AppError> {
        let sql = format!(
            r#"
            SELECT s.id, s.name, s.domain_name, s.link
            FROM shops s
            LEFT JOIN reviews r ON r.shop_id = s.id
            WHERE ($1::text IS NULL OR s.domain_name ILIKE '%' || $1 || '%')
            GROUP BY s.id
            ORDER BY {}
            "#,
            order_clause(order)
        );

        let shops = sqlx::query_as::<_, Shop>(&sql)
            .bind(name)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(shops)
    }
}
